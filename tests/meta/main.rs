//! Structural checks on the test tree itself
