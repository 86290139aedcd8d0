//! Workspace-level integration tests for SeqGen.
