//! The retain-or-destroy decision for a presenter whose container is
//! going away.

/// What the host knows about a container at teardown time.
///
/// These are honest capability answers supplied by the host, not guesses
/// made by this crate; in particular `on_history` must reflect the host's
/// real navigation stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeardownSignals {
    /// The container is being destroyed only to be recreated immediately
    /// (rotation and friends).
    pub changing_configurations: bool,
    /// The container is finishing for good.
    pub finishing: bool,
    /// The view stays reachable via back-navigation even though its
    /// container is going away.
    pub on_history: bool,
    /// The view itself is being removed from its parent.
    pub being_removed: bool,
}

/// Per-delegate retention configuration.
#[derive(Debug, Clone, Copy)]
pub struct RetentionPolicy {
    keep_across_reconfiguration: bool,
    keep_on_history: bool,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            keep_across_reconfiguration: true,
            keep_on_history: true,
        }
    }
}

impl RetentionPolicy {
    /// # Panics
    ///
    /// Panics when `keep_on_history` is set without
    /// `keep_across_reconfiguration`: a view on the history stack survives
    /// reconfiguration too, so keeping its presenter for one but not the
    /// other cannot work.
    pub fn new(keep_across_reconfiguration: bool, keep_on_history: bool) -> Self {
        if keep_on_history && !keep_across_reconfiguration {
            panic!(
                "cannot keep presenters on the navigation history without also keeping \
                 them across reconfiguration"
            );
        }
        Self {
            keep_across_reconfiguration,
            keep_on_history,
        }
    }

    pub fn keep_across_reconfiguration(&self) -> bool {
        self.keep_across_reconfiguration
    }

    pub fn keep_on_history(&self) -> bool {
        self.keep_on_history
    }

    /// True when this policy can ever retain anything; a delegate with a
    /// policy that never retains skips registry bookkeeping entirely.
    pub fn retains_anything(&self) -> bool {
        self.keep_across_reconfiguration || self.keep_on_history
    }

    /// Decide whether the presenter survives this teardown.
    ///
    /// Evaluated in order, first match wins:
    /// 1. transient reconfiguration → retain iff configured to;
    /// 2. finishing for good → never retain;
    /// 3. still reachable via history (and configured to care) → retain;
    /// 4. otherwise retain unless the view is being removed from its parent.
    pub fn should_retain(&self, signals: TeardownSignals) -> bool {
        if signals.changing_configurations {
            self.keep_across_reconfiguration
        } else if signals.finishing {
            false
        } else if self.keep_on_history && signals.on_history {
            true
        } else {
            !signals.being_removed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconfiguration_follows_the_keep_flag() {
        let signals = TeardownSignals {
            changing_configurations: true,
            // Even a finishing signal loses against an in-flight
            // reconfiguration; rule 1 matches first.
            finishing: true,
            ..Default::default()
        };

        assert!(RetentionPolicy::default().should_retain(signals));
        assert!(!RetentionPolicy::new(false, false).should_retain(signals));
    }

    #[test]
    fn finishing_never_retains() {
        let signals = TeardownSignals {
            finishing: true,
            on_history: true,
            ..Default::default()
        };
        assert!(!RetentionPolicy::default().should_retain(signals));
    }

    #[test]
    fn history_retains_when_configured() {
        let signals = TeardownSignals {
            on_history: true,
            being_removed: true,
            ..Default::default()
        };
        assert!(RetentionPolicy::default().should_retain(signals));
        assert!(!RetentionPolicy::new(true, false).should_retain(signals));
    }

    #[test]
    fn default_rule_keys_off_removal() {
        assert!(RetentionPolicy::default().should_retain(TeardownSignals::default()));
        assert!(!RetentionPolicy::default().should_retain(TeardownSignals {
            being_removed: true,
            ..Default::default()
        }));
    }

    #[test]
    #[should_panic(expected = "cannot keep presenters on the navigation history")]
    fn history_without_reconfiguration_is_rejected() {
        let _ = RetentionPolicy::new(false, true);
    }
}
