//! Boxing conversion classification.
//!
//! Both predicates are pure functions of the operation they are given. They
//! never fail: anything that is not a conversion, or whose types did not
//! resolve, is "not boxing".

use avoid_boxing_core::{ConversionOperation, Dialect, Operation};

/// Whether `operation` is a conversion the compiler inserted that boxes a
/// value type.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn is_implicit_boxing_conversion(operation: Option<&Operation>) -> bool {
    match operation {
        Some(op) if op.is_implicit => is_boxing_conversion(op),
        _ => false,
    }
}

/// Whether `operation` converts a value type to a reference type, regardless
/// of whether the user wrote the conversion.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn is_boxing_conversion(operation: &Operation) -> bool {
    let Some(conversion) = operation.as_conversion() else {
        return false;
    };
    // Nothing boxes out of an operand the host could not resolve, whatever
    // classification it attached.
    if !operation.operand_type().is_some_and(|ty| !ty.is_error()) {
        return false;
    }

    match operation.dialect {
        Dialect::CSharp => host_classifies_boxing(conversion),
        Dialect::VisualBasic => structurally_boxing(operation, conversion),
    }
}

/// C#: trust the host's classification. It sees through nullable and generic
/// value types and user-defined operators.
fn host_classifies_boxing(conversion: &ConversionOperation) -> bool {
    conversion
        .classification
        .is_some_and(|kind| kind.is_boxing())
}

/// Visual Basic: the host does not expose a boxing classification, so derive
/// it from the operand and result types.
fn structurally_boxing(operation: &Operation, conversion: &ConversionOperation) -> bool {
    let result_is_reference = operation
        .ty
        .as_ref()
        .is_some_and(|ty| ty.is_reference_type());
    let operand_is_value = conversion
        .operand
        .ty
        .as_ref()
        .is_some_and(|ty| ty.is_value_type());

    result_is_reference && operand_is_value
}
