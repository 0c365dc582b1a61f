//! Integration tests for vmsnapshot-hooks
//!
//! These tests spawn the actual binary and test end-to-end behavior. They
//! never provision `/etc/azure`: the only full run exercised here is the
//! non-root refusal, and it is skipped when the suite runs as root.

mod cli_tests;
