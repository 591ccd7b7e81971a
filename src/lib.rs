//! Workspace-level integration tests for labelgen. See `tests/`.
