//! # Gene
//!
//! A `Gene` is the atomic unit of a chromosome's encoding. It owns one value
//! of any comparable, cloneable type. Genes are never mutated in place: a
//! changed gene is a new `Gene`.
//!
//! ## Example
//!
//! ```rust
//! use evogen::gene::Gene;
//!
//! let original = Gene::new(String::from("abc"));
//! let copy = Gene::from_gene(&original);
//!
//! assert_eq!(copy, original);
//! assert_eq!(copy, String::from("abc"));
//! assert_eq!(Gene::new(5).to_string(), "[5]");
//! assert_eq!(Gene::new(5).to_expr(), "Gene::new(5)");
//! ```

use std::fmt::{self, Debug, Display};

/// Bound for values that can be carried by a gene.
pub trait Allele: Clone + PartialEq + Debug + Display + Send + Sync + 'static {}

impl<T> Allele for T where T: Clone + PartialEq + Debug + Display + Send + Sync + 'static {}

/// Values that arithmetic recombination can blend.
///
/// Integral types report `INTEGRAL = true`; blended values for them are
/// rounded back after jitter so the rounding carries no systematic bias.
pub trait NumericAllele: Allele + Copy {
    const INTEGRAL: bool;

    fn to_f64(self) -> f64;

    /// Converts back from the blended representation. Integral targets
    /// receive an already rounded value. Returns `None` when the value is not
    /// representable in `Self`.
    fn from_f64(value: f64) -> Option<Self>;
}

macro_rules! numeric_allele {
    (integral => $($t:ty),*) => {
        $(
            impl NumericAllele for $t {
                const INTEGRAL: bool = true;

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_f64(value: f64) -> Option<Self> {
                    // `MAX as f64` rounds up to `MAX + 1` for the wide types
                    if value >= <$t>::MIN as f64 && value < <$t>::MAX as f64 + 1.0 {
                        Some(value as $t)
                    } else {
                        None
                    }
                }
            }
        )*
    };
    (float => $($t:ty),*) => {
        $(
            impl NumericAllele for $t {
                const INTEGRAL: bool = false;

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_f64(value: f64) -> Option<Self> {
                    let narrowed = value as $t;
                    (narrowed.is_finite() || !value.is_finite()).then_some(narrowed)
                }
            }
        )*
    };
}

numeric_allele!(integral => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
numeric_allele!(float => f32, f64);

/// Wraps one value of a chromosome's encoding.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Hash)]
pub struct Gene<T> {
    value: T,
}

impl<T: Allele> Gene<T> {
    /// Creates a gene holding a copy of `value`.
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Creates a gene holding a deep copy of another gene's value.
    pub fn from_gene(other: &Gene<T>) -> Self {
        Self {
            value: other.value.clone(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the expression that rebuilds this gene.
    pub fn to_expr(&self) -> String {
        format!("Gene::new({:?})", self.value)
    }
}

impl<T: Allele> From<T> for Gene<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: PartialEq> PartialEq for Gene<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Gene<T> {}

impl<T: Allele> PartialEq<T> for Gene<T> {
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

impl<T: Display> Display for Gene<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Bag(Vec<u8>);

    impl Display for Bag {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }

    #[test]
    fn test_copy_is_independent_of_source() {
        let mut raw = Bag(vec![1, 2]);
        let gene = Gene::new(raw.clone());
        let copy = Gene::from_gene(&gene);

        raw.0.push(3);

        assert_eq!(gene.value(), &Bag(vec![1, 2]));
        assert_eq!(copy.value(), gene.value());
    }

    #[test]
    fn test_equality_with_gene_or_raw_value() {
        let gene = Gene::new(4);
        assert_eq!(gene, Gene::new(4));
        assert_eq!(gene, 4);
        assert_ne!(gene, 5);
    }

    #[test]
    fn test_textual_forms() {
        assert_eq!(Gene::new(3).to_string(), "[3]");
        assert_eq!(Gene::new("a".to_string()).to_expr(), "Gene::new(\"a\")");
        assert_eq!(Gene::new(1.5).to_string(), "[1.5]");
    }

    #[test]
    fn test_numeric_conversion_rejects_out_of_range() {
        assert_eq!(<u8 as NumericAllele>::from_f64(-4.0), None);
        assert_eq!(<u8 as NumericAllele>::from_f64(300.0), None);
        assert_eq!(<u8 as NumericAllele>::from_f64(255.0), Some(255));
        assert_eq!(<u8 as NumericAllele>::from_f64(f64::NAN), None);
        assert_eq!(<i32 as NumericAllele>::from_f64(6.0), Some(6));
        assert_eq!(<i8 as NumericAllele>::from_f64(-128.0), Some(-128));
        assert_eq!(<f32 as NumericAllele>::from_f64(1.0e300), None);
        assert_eq!(<f64 as NumericAllele>::from_f64(2.5), Some(2.5));
        assert!(<i64 as NumericAllele>::INTEGRAL);
        assert!(!<f32 as NumericAllele>::INTEGRAL);
    }
}
