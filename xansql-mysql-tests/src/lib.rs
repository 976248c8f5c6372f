//! Integration tests for xansql-mysql live in `tests/`.
