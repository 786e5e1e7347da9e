//! # Truthiness Rules
//!
//! Each accepted label representation has an explicit rule:
//!
//! | representation   | false when                 |
//! | ---------------- | -------------------------- |
//! | absent / null    | always                     |
//! | `bool`           | `false`                    |
//! | integer          | `== 0`                     |
//! | float            | `== 0.0` (NaN is true)     |
//! | text             | empty                      |

/// Explicit coercion of a label representation to `bool`.
pub trait Truthy {
    /// Coerce to `bool`.
    fn truthy(&self) -> bool;
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::truthy)
    }
}

impl Truthy for bool {
    fn truthy(&self) -> bool {
        *self
    }
}

impl Truthy for str {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

macro_rules! int_truthy {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

int_truthy!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for f64 {
    fn truthy(&self) -> bool {
        *self != 0.0
    }
}
