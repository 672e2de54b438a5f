//! The generic validated-field mechanism.
//!
//! A [`Field`] couples one declared attribute's rules (name, default,
//! optionality, read-only) with its per-entity value. Entities own
//! their fields directly as struct members; there is no shared
//! per-field store, so field state lives and dies with the entity.

use crate::error::ValidateError;

/// A declared, validated attribute of an entity type.
///
/// The set path is all-or-nothing: [`Field::set`] runs
/// [`Field::validate`] first and only stores on success, so a failed
/// assignment leaves the previous value (or the default) visible.
///
/// Specializations that add rules must call through to `validate`
/// before their own checks and finish with [`Field::store`], keeping
/// the base optionality and read-only rules in force.
///
/// # Examples
///
/// ```
/// use relay_core::{Field, ValidateError};
///
/// let mut label: Field<String> = Field::new("label", None).optional();
/// assert_eq!(label.get(), None);
///
/// label.set(Some("sensor".into())).unwrap();
/// assert_eq!(label.get().map(String::as_str), Some("sensor"));
///
/// let mut seed: Field<u64> = Field::new("seed", Some(0)).readonly();
/// seed.set(Some(42)).unwrap();
/// assert_eq!(
///     seed.set(Some(7)),
///     Err(ValidateError::ReadOnly { field: "seed" })
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Field<T> {
    name: &'static str,
    default: Option<T>,
    optional: bool,
    readonly: bool,
    value: Option<T>,
    assigned: bool,
}

impl<T> Field<T> {
    /// A required, writable field with the given name and default.
    ///
    /// The default is what [`Field::get`] reports until the first
    /// assignment; it is owned by this field instance, so mutable
    /// defaults never alias across entities.
    pub fn new(name: &'static str, default: Option<T>) -> Self {
        Self {
            name,
            default,
            optional: false,
            readonly: false,
            value: None,
            assigned: false,
        }
    }

    /// Permit assigning an absent value.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Permit at most one assignment.
    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    /// The field's declared name, used in error variants.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` once a value has been assigned.
    pub fn is_assigned(&self) -> bool {
        self.assigned
    }

    /// The current value: the assigned one, or the default if never
    /// assigned. `None` means the field is absent (cleared or no
    /// default).
    pub fn get(&self) -> Option<&T> {
        if self.assigned {
            self.value.as_ref()
        } else {
            self.default.as_ref()
        }
    }

    /// Check the base assignment rules without storing anything.
    ///
    /// Fails with [`ValidateError::NotOptional`] when clearing a
    /// required field, and [`ValidateError::ReadOnly`] when assigning
    /// a read-only field a second time.
    pub fn validate(&self, value: Option<&T>) -> Result<(), ValidateError> {
        if value.is_none() && !self.optional {
            return Err(ValidateError::NotOptional { field: self.name });
        }
        if self.readonly && self.assigned {
            return Err(ValidateError::ReadOnly { field: self.name });
        }
        Ok(())
    }

    /// Validate and store in one step.
    pub fn set(&mut self, value: Option<T>) -> Result<(), ValidateError> {
        self.validate(value.as_ref())?;
        self.store(value);
        Ok(())
    }

    /// Store a value that has already passed validation.
    ///
    /// For specializations whose extended checks run between
    /// [`Field::validate`] and the store; callers must have run
    /// `validate` on this value first.
    pub fn store(&mut self, value: Option<T>) {
        self.value = value;
        self.assigned = true;
    }
}
