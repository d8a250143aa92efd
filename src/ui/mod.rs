/// Console rendering of result views.
pub mod table;
