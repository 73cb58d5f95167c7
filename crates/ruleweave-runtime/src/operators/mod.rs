//! Operator execution modules

mod comparison;

pub(crate) use comparison::execute_compare;
