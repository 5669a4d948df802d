// This code was automatically generated by tfstruct-gen. Do not edit manually.

//! Helpers shared by the generated types.
/// Returns `true` when `value` equals its type's default value.
///
/// Used as the `skip_serializing_if` predicate for optional scalar
/// fields, which are left out of serialized output at their zero value.
pub fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}
