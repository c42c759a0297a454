// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

/// Reserved product ids that return canned sandbox responses.
///
/// The billing backend answers these without a signature, so they can only ever be
/// accepted through the sentinel bypass, and only when it is enabled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TestSentinel {
    Purchased,
    Canceled,
    Refunded,
    ItemUnavailable,
}

impl TestSentinel {
    pub const ALL: [TestSentinel; 4] = [
        TestSentinel::Purchased,
        TestSentinel::Canceled,
        TestSentinel::Refunded,
        TestSentinel::ItemUnavailable,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TestSentinel::Purchased => "android.test.purchased",
            TestSentinel::Canceled => "android.test.canceled",
            TestSentinel::Refunded => "android.test.refunded",
            TestSentinel::ItemUnavailable => "android.test.item_unavailable",
        }
    }

    /// Exact, case-sensitive match against a receipt identifier.
    pub fn from_receipt_id(receipt_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == receipt_id)
    }
}

impl fmt::Display for TestSentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
