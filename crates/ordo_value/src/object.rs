//! User-defined objects as interval bounds.
//!
//! An object brings its own ordering and, optionally, a successor (making
//! it iterable) or an offset (making it steppable as a number).

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::BuildHasher;
use std::sync::Arc;

use ordo_interval::Stride;
use rustc_hash::FxBuildHasher;

/// Capability object stored in [`Value::Object`](crate::Value::Object).
pub trait Object: fmt::Debug + Send + Sync {
    /// Name used in error messages.
    fn type_name(&self) -> &str;

    /// Three-way comparison against another object; `None` if incomparable.
    ///
    /// Implementations usually downcast `other` through [`Object::as_any`].
    fn compare(&self, other: &dyn Object) -> Option<Ordering>;

    /// Whether [`Object::successor`] is implemented.
    fn is_discrete(&self) -> bool {
        false
    }

    /// Next object in the domain's order.
    fn successor(&self) -> Option<Arc<dyn Object>> {
        None
    }

    /// Whether the object behaves as a number for stepping.
    fn is_numeric(&self) -> bool {
        false
    }

    /// `self + count * stride`.
    fn offset(&self, stride: Stride, count: u64) -> Option<Arc<dyn Object>> {
        let _ = (stride, count);
        None
    }

    /// Hash that agrees with `compare(..) == Some(Equal)`.
    fn hash_code(&self) -> u64 {
        FxBuildHasher.hash_one(self.type_name())
    }

    /// User-facing rendering.
    fn display(&self) -> String;

    fn as_any(&self) -> &dyn Any;
}
