//! Sound card and USB controller interrupt sharing check.
//!
//! Besides the aggregate `irqs` result this emits `snd_irqs` and
//! `usb_irqs` for the device classes that are present.

use regex::Regex;

use crate::checks::{CheckContext, Probe, ProbeError, ProbeOutput};
use crate::host::InterruptLine;
use crate::report::Finding;

const SOUND_KEY: &str = "snd_irqs";
const SOUND_HEADLINE: &str = "Sound Card IRQs";
const USB_KEY: &str = "usb_irqs";
const USB_HEADLINE: &str = "USB Controller IRQs";

/// Checks whether sound cards and USB host controllers share their
/// interrupt line with other devices.
///
/// Every matching line becomes a finding under `irqs` and under the
/// per-class `snd_irqs` or `usb_irqs` key. A class key is only present
/// when at least one interrupt of that class exists.
pub struct IrqsProbe;

/// How a device class is described in findings.
struct DeviceClass<'a> {
    pattern: &'a Regex,
    unshared: fn(&str, &str) -> String,
    shared: fn(&str, &str, &str) -> String,
}

impl DeviceClass<'_> {
    /// A finding for this line, if one of its devices belongs to the class.
    fn inspect(&self, line: &InterruptLine) -> Option<Finding> {
        let devices = line.devices();
        let index = devices
            .iter()
            .position(|d| self.pattern.is_match(&d.to_lowercase()))?;
        let device = devices[index];

        if devices.len() > 1 {
            let others: Vec<&str> = devices
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, d)| *d)
                .collect();
            Some(Finding::fail((self.shared)(
                device,
                &line.irq,
                &others.join(", "),
            )))
        } else {
            Some(Finding::pass((self.unshared)(device, &line.irq)))
        }
    }
}

fn compile(pattern: &str, what: &str) -> Result<Regex, ProbeError> {
    Regex::new(pattern).map_err(|e| {
        tracing::debug!("invalid {} pattern '{}': {}", what, pattern, e);
        ProbeError::MalformedInput(format!("the {} interrupt pattern '{}'", what, pattern))
    })
}

impl Probe for IrqsProbe {
    fn key(&self) -> &'static str {
        "irqs"
    }

    fn headline(&self) -> &'static str {
        "IRQs"
    }

    fn description(&self) -> &'static str {
        "Sound cards and USB controllers have an interrupt line of their own"
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut ProbeOutput) -> Result<(), ProbeError> {
        let sound_pattern = compile(&ctx.config.irqs.sound, "sound")?;
        let usb_pattern = compile(&ctx.config.irqs.usb, "USB")?;
        let lines = ctx.host.interrupt_actions().require("/proc/interrupts")?;

        let sound = DeviceClass {
            pattern: &sound_pattern,
            unshared: |device, irq| {
                format!("Soundcard {} with IRQ {} does not share its IRQ.", device, irq)
            },
            shared: |device, irq, others| {
                format!(
                    "Soundcard {} with IRQ {} shares its IRQ with the following other devices: {}",
                    device, irq, others
                )
            },
        };
        let usb = DeviceClass {
            pattern: &usb_pattern,
            unshared: |device, irq| {
                format!("USB port {} with IRQ {} does not share its IRQ.", device, irq)
            },
            shared: |device, irq, others| {
                format!(
                    "Found USB port {} with IRQ {} that shares its IRQ with the following other \
                     devices: {}",
                    device, irq, others
                )
            },
        };

        for line in &lines {
            if let Some(finding) = sound.inspect(line) {
                out.record(finding.clone());
                out.satellite(SOUND_KEY, SOUND_HEADLINE, finding);
            }
            if let Some(finding) = usb.inspect(line) {
                out.record(finding.clone());
                out.satellite(USB_KEY, USB_HEADLINE, finding);
            }
        }

        if out.is_empty() {
            out.not_applicable("No sound card or USB controller interrupts found.");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::probes::testing::{run_on, run_with};
    use crate::config::AuditConfig;
    use crate::host::{HostSnapshot, Outcome, UserIdentity};
    use crate::report::{CheckResult, Status};

    fn host(lines: &[(&str, &str)]) -> HostSnapshot {
        HostSnapshot {
            interrupts: Outcome::Found(
                lines
                    .iter()
                    .map(|(irq, action)| InterruptLine::new(*irq, *action))
                    .collect(),
            ),
            ..HostSnapshot::default()
        }
    }

    fn find<'a>(results: &'a [CheckResult], key: &str) -> Option<&'a CheckResult> {
        results.iter().find(|r| r.key == key)
    }

    #[test]
    fn unshared_sound_card_passes() {
        let results = run_on(&IrqsProbe, &host(&[("130", "snd_hda_intel:card0")]));
        let irqs = find(&results, "irqs").unwrap();
        let snd = find(&results, "snd_irqs").unwrap();
        assert_eq!(irqs.status(), Status::Pass);
        assert_eq!(snd.status(), Status::Pass);
        assert_eq!(
            snd.detail(),
            "Soundcard snd_hda_intel:card0 with IRQ 130 does not share its IRQ."
        );
        assert!(find(&results, "usb_irqs").is_none());
    }

    #[test]
    fn shared_sound_card_fails_naming_both_devices() {
        let results = run_on(
            &IrqsProbe,
            &host(&[("17", "snd_hda_intel:card0, i801_smbus")]),
        );
        let snd = find(&results, "snd_irqs").unwrap();
        assert_eq!(snd.status(), Status::Fail);
        let detail = snd.detail();
        assert!(detail.contains("snd_hda_intel:card0"));
        assert!(detail.contains("i801_smbus"));
        assert_eq!(find(&results, "irqs").unwrap().status(), Status::Fail);
    }

    #[test]
    fn matching_device_is_named_even_when_listed_second() {
        let results = run_on(
            &IrqsProbe,
            &host(&[("17", "i801_smbus, snd_hda_intel:card0")]),
        );
        let detail = find(&results, "snd_irqs").unwrap().detail();
        assert!(detail.starts_with("Soundcard snd_hda_intel:card0 with IRQ 17 shares"));
        assert!(detail.ends_with("devices: i801_smbus"));
    }

    #[test]
    fn usb_controllers_are_checked() {
        let results = run_on(
            &IrqsProbe,
            &host(&[("16", "ehci_hcd:usb1, nvidia"), ("30", "xhci_hcd")]),
        );
        let usb = find(&results, "usb_irqs").unwrap();
        assert_eq!(usb.findings.len(), 2);
        assert_eq!(usb.findings[0].status, Status::Fail);
        assert!(usb.findings[0].message.starts_with("Found USB port ehci_hcd:usb1 with IRQ 16"));
        assert_eq!(usb.findings[1].status, Status::Pass);
        assert!(find(&results, "snd_irqs").is_none());
    }

    #[test]
    fn aggregate_fails_if_any_line_fails() {
        let results = run_on(
            &IrqsProbe,
            &host(&[
                ("130", "snd_hda_intel:card0"),
                ("16", "ehci_hcd:usb1, nvidia"),
            ]),
        );
        let irqs = find(&results, "irqs").unwrap();
        assert_eq!(irqs.findings.len(), 2);
        assert_eq!(irqs.status(), Status::Fail);
        assert_eq!(find(&results, "snd_irqs").unwrap().status(), Status::Pass);
        assert_eq!(find(&results, "usb_irqs").unwrap().status(), Status::Fail);
    }

    #[test]
    fn audiodsp_counts_as_sound() {
        let results = run_on(&IrqsProbe, &host(&[("9", "AudioDSP")]));
        assert!(find(&results, "snd_irqs").is_some());
    }

    #[test]
    fn no_matching_interrupts_do_not_apply() {
        let results = run_on(&IrqsProbe, &host(&[("0", "timer"), ("8", "rtc0")]));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status(), Status::NotApplicable);
    }

    #[test]
    fn invalid_pattern_fails_the_probe() {
        let mut config = AuditConfig::default();
        config.irqs.sound = "snd_(".to_string();
        let results = run_with(
            &IrqsProbe,
            &host(&[("130", "snd_hda_intel:card0")]),
            &config,
            &UserIdentity::new("alice", 1000),
        );
        assert_eq!(results[0].status(), Status::Fail);
        assert!(results[0].detail().contains("snd_("));
    }
}
