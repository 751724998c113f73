//! Per-call validation dependencies.

use civ_core::enums::{EmptyIdPolicy, ReportMode};

use crate::lookup::RecordLookup;
use crate::messages::{Translate, Untranslated, render};

/// Policy knobs for join validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub empty_ids: EmptyIdPolicy,
    pub report: ReportMode,
}

impl ValidationPolicy {
    #[must_use]
    pub const fn new(empty_ids: EmptyIdPolicy, report: ReportMode) -> Self {
        Self { empty_ids, report }
    }

    #[must_use]
    pub fn stops_at_first_error(&self) -> bool {
        self.report == ReportMode::FirstError
    }
}

/// Everything a serializer needs besides the candidate mapping.
#[derive(Clone, Copy)]
pub struct ValidationContext<'a> {
    pub lookup: &'a dyn RecordLookup,
    pub messages: &'a dyn Translate,
    pub policy: ValidationPolicy,
}

impl<'a> ValidationContext<'a> {
    /// Context with untranslated messages and the default policy.
    #[must_use]
    pub fn new(lookup: &'a dyn RecordLookup) -> Self {
        Self {
            lookup,
            messages: &Untranslated,
            policy: ValidationPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_messages(mut self, messages: &'a dyn Translate) -> Self {
        self.messages = messages;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub(crate) fn message(&self, msgid: &str, args: &[(&str, &str)]) -> String {
        render(self.messages, msgid, args)
    }
}
