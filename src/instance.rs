//! Type-membership predicates
//!
//! Rust values carry no runtime class hierarchy, so membership is decided
//! against a [`TypeDescriptor`]: a named, open set of [`TypeId`]s. A
//! descriptor built with [`TypeDescriptor::of`] contains exactly one type;
//! further members (subtypes, trait implementers, wrapper types) are
//! registered with [`TypeDescriptor::with_member`], and a value is an
//! instance of the descriptor when its concrete type is any member.
//!
//! # Example
//!
//! ```rust
//! use std::any::Any;
//! use predica::prelude::*;
//!
//! struct Circle;
//! struct Square;
//! struct Label;
//!
//! // "Shape" and its implementers
//! let shape = TypeDescriptor::named("Shape")
//!     .with_member::<Circle>()
//!     .with_member::<Square>();
//!
//! let is_shape = predica::try_instance_of(shape).unwrap();
//! assert!(is_shape.check(&Circle as &dyn Any));
//! assert!(is_shape.check(&Square as &dyn Any));
//! assert!(!is_shape.check(&Label as &dyn Any));
//! ```

use std::any::{type_name, Any, TypeId};
use std::fmt;

use crate::combinators::{negation, Not, Predicate};
use crate::error::{PredicateError, Result};

/// A named set of concrete types used for membership tests.
#[derive(Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    name: String,
    members: Vec<(TypeId, &'static str)>,
}

impl TypeDescriptor {
    /// Descriptor containing exactly `T`, named after it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use predica::TypeDescriptor;
    ///
    /// let d = TypeDescriptor::of::<u8>();
    /// assert_eq!(d.name(), "u8");
    /// assert!(d.contains::<u8>());
    /// assert!(!d.contains::<u16>());
    /// ```
    pub fn of<T: Any>() -> Self {
        TypeDescriptor {
            name: type_name::<T>().to_string(),
            members: vec![(TypeId::of::<T>(), type_name::<T>())],
        }
    }

    /// Descriptor with the given name and no members yet.
    ///
    /// An empty descriptor describes no type and is rejected by
    /// [`try_instance_of`] until at least one member is added.
    pub fn named(name: impl Into<String>) -> Self {
        TypeDescriptor {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Register `U` as a member of this descriptor.
    ///
    /// Registering a type that is already a member is a no-op.
    pub fn with_member<U: Any>(mut self) -> Self {
        let id = TypeId::of::<U>();
        if !self.members.iter().any(|(member, _)| *member == id) {
            self.members.push((id, type_name::<U>()));
        }
        self
    }

    /// Display name of the descriptor.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `U` is a member.
    pub fn contains<U: Any>(&self) -> bool {
        self.contains_id(TypeId::of::<U>())
    }

    /// Whether the type with the given id is a member.
    pub fn contains_id(&self, id: TypeId) -> bool {
        self.members.iter().any(|(member, _)| *member == id)
    }

    /// Number of member types.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when no type has been registered.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Names of the member types, in registration order.
    pub fn member_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.members.iter().map(|(_, name)| *name)
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("members", &self.member_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Predicate that holds when a value's concrete type belongs to a descriptor.
#[derive(Clone, Debug)]
pub struct InstanceOf {
    descriptor: TypeDescriptor,
}

impl InstanceOf {
    /// The descriptor this predicate tests against.
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    #[inline]
    fn matches(&self, value: &dyn Any) -> bool {
        // Any::type_id on the trait object dispatches to the concrete type
        self.descriptor.contains_id(Any::type_id(value))
    }
}

impl Predicate<dyn Any> for InstanceOf {
    #[inline]
    fn check(&self, value: &dyn Any) -> bool {
        self.matches(value)
    }
}

impl Predicate<dyn Any + Send> for InstanceOf {
    #[inline]
    fn check(&self, value: &(dyn Any + Send)) -> bool {
        self.matches(value)
    }
}

impl Predicate<dyn Any + Send + Sync> for InstanceOf {
    #[inline]
    fn check(&self, value: &(dyn Any + Send + Sync)) -> bool {
        self.matches(value)
    }
}

impl Predicate<Box<dyn Any>> for InstanceOf {
    #[inline]
    fn check(&self, value: &Box<dyn Any>) -> bool {
        self.matches(&**value)
    }
}

impl Predicate<Box<dyn Any + Send + Sync>> for InstanceOf {
    #[inline]
    fn check(&self, value: &Box<dyn Any + Send + Sync>) -> bool {
        self.matches(&**value)
    }
}

/// Create a predicate that holds for values whose concrete type is `T`.
///
/// # Example
///
/// ```rust
/// use std::any::Any;
/// use predica::prelude::*;
///
/// let is_string = instance_of::<String>();
/// assert!(is_string.check(&String::from("hi") as &dyn Any));
/// assert!(!is_string.check(&7_u32 as &dyn Any));
/// ```
pub fn instance_of<T: Any>() -> InstanceOf {
    InstanceOf {
        descriptor: TypeDescriptor::of::<T>(),
    }
}

/// Create the negation of [`instance_of`].
///
/// # Example
///
/// ```rust
/// use std::any::Any;
/// use predica::prelude::*;
///
/// let not_string = not_instance_of::<String>();
/// assert!(not_string.check(&7_u32 as &dyn Any));
/// ```
pub fn not_instance_of<T: Any>() -> Not<InstanceOf> {
    negation(instance_of::<T>())
}

/// Create a membership predicate from a runtime descriptor.
///
/// Fails with [`PredicateError::InvalidArgument`] when the descriptor has
/// no members.
///
/// # Example
///
/// ```rust
/// use predica::{try_instance_of, TypeDescriptor};
///
/// assert!(try_instance_of(TypeDescriptor::of::<i64>()).is_ok());
/// assert!(try_instance_of(TypeDescriptor::named("Nothing")).is_err());
/// ```
pub fn try_instance_of(descriptor: TypeDescriptor) -> Result<InstanceOf> {
    if descriptor.is_empty() {
        return Err(PredicateError::invalid_argument(
            "try_instance_of",
            format!("type descriptor `{}` has no member types", descriptor.name()),
        ));
    }
    Ok(InstanceOf { descriptor })
}

/// Create the negation of [`try_instance_of`].
pub fn try_not_instance_of(descriptor: TypeDescriptor) -> Result<Not<InstanceOf>> {
    try_instance_of(descriptor).map(negation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::PredicateExt;

    struct Dog;
    struct Cat;
    struct Rock;

    fn animal() -> TypeDescriptor {
        TypeDescriptor::named("Animal")
            .with_member::<Dog>()
            .with_member::<Cat>()
    }

    #[test]
    fn test_instance_of_exact_type() {
        let p = instance_of::<i32>();
        assert!(p.check(&1_i32 as &dyn Any));
        assert!(!p.check(&1_i64 as &dyn Any));
        assert!(!p.check(&"1" as &dyn Any));
    }

    #[test]
    fn test_instance_of_members() {
        let p = try_instance_of(animal()).unwrap();
        assert!(p.check(&Dog as &dyn Any));
        assert!(p.check(&Cat as &dyn Any));
        assert!(!p.check(&Rock as &dyn Any));
    }

    #[test]
    fn test_not_instance_of_is_complement() {
        let values: Vec<Box<dyn Any>> = vec![Box::new(1_i32), Box::new("s"), Box::new(Dog)];
        let is = instance_of::<i32>();
        let is_not = not_instance_of::<i32>();
        for value in &values {
            assert_ne!(is.check(value), is_not.check(value));
        }
    }

    #[test]
    fn test_boxed_value_uses_inner_type() {
        let boxed: Box<dyn Any> = Box::new(3.5_f64);
        assert!(instance_of::<f64>().check(&boxed));
        assert!(!instance_of::<Box<dyn Any>>().check(&boxed));
    }

    #[test]
    fn test_send_sync_objects() {
        let value: Box<dyn Any + Send + Sync> = Box::new(String::from("x"));
        assert!(instance_of::<String>().check(&value));
        assert!(instance_of::<String>().check(&*value));
    }

    #[test]
    fn test_empty_descriptor_rejected() {
        let err = try_instance_of(TypeDescriptor::named("Empty")).unwrap_err();
        assert_eq!(err.operation(), "try_instance_of");
        assert!(err.reason().contains("Empty"));
        assert!(try_not_instance_of(TypeDescriptor::named("Empty")).is_err());
    }

    #[test]
    fn test_try_not_instance_of() {
        let p = try_not_instance_of(animal()).unwrap();
        assert!(p.check(&Rock as &dyn Any));
        assert!(!p.check(&Dog as &dyn Any));
    }

    #[test]
    fn test_with_member_deduplicates() {
        let d = TypeDescriptor::of::<u8>().with_member::<u8>().with_member::<u16>();
        assert_eq!(d.len(), 2);
        assert_eq!(d.member_names().collect::<Vec<_>>(), vec!["u8", "u16"]);
    }

    #[test]
    fn test_composes_with_or() {
        // InstanceOf has several Predicate impls, so the input type is named
        let numeric = PredicateExt::<dyn Any>::or(instance_of::<i32>(), instance_of::<f64>());
        assert!(numeric.check(&1_i32 as &dyn Any));
        assert!(numeric.check(&1.0_f64 as &dyn Any));
        assert!(!numeric.check(&'c' as &dyn Any));
    }
}
