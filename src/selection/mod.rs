pub mod elitist;
pub mod fill_in_best;
pub mod parent_selection;
pub mod roulette;
pub mod survivor_selection;
pub mod tournament;

pub use elitist::ElitistSurvivors;
pub use fill_in_best::FillInBest;
pub use parent_selection::ParentSelection;
pub use roulette::RouletteSelection;
pub use survivor_selection::SurvivorSelection;
pub use tournament::TournamentSelection;
