//! Matrix products and direct solves.
//!
//! | Family | Operations |
//! |--------|-----------|
//! | General product | [`multiply`], [`multiply_into_left`], [`multiply_into_right`], [`multiply_square`] |
//! | Matrix-vector | [`vmult`], [`vmult_in_place`] |
//! | Hinted product | [`multiply_ext`], [`multiply_ext_into_left`], [`multiply_ext_into_right`], [`multiply_ext_square`] |
//! | Triangular solve | [`trisolve`], [`trisolve_in_place`], [`vtrisolve`], [`vtrisolve_in_place`] |
//! | Diagonal solve | [`diagsolve`], [`diagsolve_in_place`], [`vdiagsolve`], [`vdiagsolve_in_place`] |
//!
//! Out-of-place forms take a distinct `&mut` destination. A destination that
//! is also an input is expressed by the `_into_left`, `_into_right` and
//! `_in_place` forms, which take that operand by `&mut` and handle the
//! overlap internally.

pub mod multiply;
pub mod solve;

pub use multiply::{
    multiply, multiply_ext, multiply_ext_into_left, multiply_ext_into_right, multiply_ext_square,
    multiply_into_left, multiply_into_right, multiply_square, vmult, vmult_in_place,
};
pub use solve::{
    diagsolve, diagsolve_in_place, trisolve, trisolve_in_place, vdiagsolve, vdiagsolve_in_place,
    vtrisolve, vtrisolve_in_place,
};
