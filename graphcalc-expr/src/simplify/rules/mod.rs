//! Implementation of the simplification rules, one module per operator.
//!
//! Each rule is a function that takes the **already simplified** operands of a node and returns
//! the simplified node. Operands are taken by value, so a rule that keeps an operand unchanged
//! (`1*a = a`) moves it into the result instead of copying it.
//!
//! Every rule returns a tree that is itself simplified. When a rule rebuilds a node of another
//! kind from parts of its operands (`a + -b = a-b`), it goes through that kind's rule function
//! rather than constructing the node directly, so the output is never left half-simplified.

pub mod add;
pub mod call;
pub mod divide;
pub mod multiply;
pub mod negate;
pub mod power;
pub mod subtract;
