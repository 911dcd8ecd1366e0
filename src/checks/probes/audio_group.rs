//! Real-time priority and locked memory limit check.
//!
//! Compares the soft limits of the scanning process against the
//! configured minimum priority and an unlimited memlock.

use crate::checks::{see_also, CheckContext, Probe, ProbeError, ProbeOutput};
use crate::host::ResourceKind;

/// Checks the limits granted to the user, usually through membership of
/// the audio group and a matching limits.conf entry.
///
/// The soft limits are what a freshly started audio server gets, so those
/// are the ones compared.
pub struct AudioGroupProbe;

impl Probe for AudioGroupProbe {
    fn key(&self) -> &'static str {
        "audio_group"
    }

    fn headline(&self) -> &'static str {
        "Audio Group"
    }

    fn description(&self) -> &'static str {
        "Real-time priority and locked memory limits are high enough"
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut ProbeOutput) -> Result<(), ProbeError> {
        let rtprio = ctx
            .host
            .resource_limits(ResourceKind::RealtimePriority)
            .require("the real-time priority limit")?
            .soft;
        let memlock = ctx
            .host
            .resource_limits(ResourceKind::LockedMemory)
            .require("the locked memory limit")?
            .soft;
        let user = &ctx.user.name;
        let min = ctx.config.min_rtprio;

        if rtprio.at_least(min) && memlock.is_unlimited() {
            out.pass(format!(
                "User {} has a real-time priority limit of {} and a locked memory limit of {}.",
                user, rtprio, memlock
            ));
        } else {
            out.fail(format!(
                "User {user} has a real-time priority limit of {rtprio} (at least {min} is needed) \
                 and a locked memory limit of {memlock} (unlimited is needed). Add yourself to the \
                 audio group with 'sudo usermod -a -G audio {user}', make sure the group is granted \
                 these limits in limits.conf and log in again. {}",
                see_also("audio_group")
            ));
        }
        Ok(())
    }
}
