use std::time::Duration;

use leptos::{
    html,
    leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle},
    prelude::*,
};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::content::SiteConfig;
use crate::reveal::{
    ElementState, Observation, Presentation, RevealSequencer, RevealTiming, ScheduledReveal,
    SectionLayout, ViewportEvent, WallClock,
};

// timers are armed one frame late so the clock has passed the delay when the callback reads it
const TIMER_SLACK: Duration = Duration::from_millis(16);

/// Page-wide reveal state, provided once by the app root.
#[derive(Clone, Copy)]
pub struct RevealContext {
    sequencer: StoredValue<RevealSequencer<WallClock>>,
    site: StoredValue<SiteConfig>,
}

pub fn provide_reveal_context(site: SiteConfig) {
    let sequencer = RevealSequencer::with_timing(WallClock::default(), site.reveal);
    provide_context(RevealContext {
        sequencer: StoredValue::new(sequencer),
        site: StoredValue::new(site),
    });
}

/// Handle a section component uses to observe its container and style its elements.
#[derive(Clone, Copy)]
pub struct RevealHandle {
    section_id: &'static str,
    pub node_ref: NodeRef<html::Div>,
    timing: RevealTiming,
    tick: RwSignal<u32>,
    handles: StoredValue<Vec<TimeoutHandle>>,
    ctx: RevealContext,
}

impl RevealHandle {
    /// Feeds a viewport event to the sequencer and arms the staggered timers on first entry.
    pub fn observe(self, event: ViewportEvent) {
        let observation = self
            .ctx
            .sequencer
            .try_update_value(|s| s.observe(self.section_id, event));
        if let Some(Observation::Triggered(schedule)) = observation {
            self.tick.update(|t| *t += 1);
            self.arm(schedule);
        }
    }

    fn arm(self, schedule: Vec<ScheduledReveal>) {
        let section_id = self.section_id;
        let sequencer = self.ctx.sequencer;
        let tick = self.tick;
        for reveal in schedule {
            let res = set_timeout_with_handle(
                move || {
                    let live = sequencer
                        .try_with_value(|s| s.fire(section_id, reveal.ticket))
                        .unwrap_or(false);
                    if live {
                        tick.try_update(|t| *t += 1);
                    }
                },
                reveal.delay + TIMER_SLACK,
            );
            match res {
                Ok(handle) => self.handles.update_value(|v| v.push(handle)),
                Err(e) => log::warn!("couldn't schedule reveal in {section_id}: {e:?}"),
            }
        }
    }

    fn cancel(self) {
        self.ctx
            .sequencer
            .try_update_value(|s| s.cancel(self.section_id));
        self.handles.try_update_value(|v| {
            for handle in v.drain(..) {
                handle.clear();
            }
        });
    }

    pub fn triggered(self) -> bool {
        self.tick.track();
        self.ctx
            .sequencer
            .try_with_value(|s| s.is_triggered(self.section_id))
            .unwrap_or(true)
    }

    pub fn visible(self, element: usize) -> bool {
        self.tick.track();
        self.ctx
            .sequencer
            .try_with_value(|s| s.element_state(self.section_id, element))
            .map_or(true, |state| state == ElementState::Visible)
    }

    /// Inline style for one element: its resting or hidden presentation plus the transition.
    pub fn style(self, element: usize) -> String {
        let presentation = if self.visible(element) {
            Presentation::RESTING
        } else {
            Presentation::HIDDEN
        };
        let ease = self.timing.easing.css();
        format!(
            "{} transition: opacity {d}s {ease}, transform {d}s {ease};",
            presentation.to_style(),
            d = self.timing.duration,
        )
    }
}

fn register(section_id: &'static str, layout: SectionLayout) -> RevealHandle {
    let ctx = expect_context::<RevealContext>();
    let timing = ctx.site.with_value(|site| site.timing_for(section_id));
    ctx.sequencer
        .update_value(|s| s.register_with_timing(section_id, layout, timing));

    let handle = RevealHandle {
        section_id,
        node_ref: NodeRef::new(),
        timing,
        tick: RwSignal::new(0),
        handles: StoredValue::new(Vec::new()),
        ctx,
    };
    on_cleanup(move || handle.cancel());
    handle
}

/// Registers `section_id` with `layout` and observes the returned handle's `node_ref`.
///
/// The section is cancelled, and its pending timers cleared, when the calling
/// component is cleaned up.
pub fn use_reveal(section_id: &'static str, layout: SectionLayout) -> RevealHandle {
    let handle = register(section_id, layout);
    let threshold = handle.ctx.site.with_value(|site| site.threshold);

    use_intersection_observer_with_options(
        handle.node_ref,
        move |entries, _| {
            for entry in entries {
                handle.observe(ViewportEvent::from_intersection(
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    threshold,
                ));
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );
    handle
}

/// Like [`use_reveal`], but triggers as soon as the section mounts instead of on scroll.
pub fn use_reveal_on_mount(section_id: &'static str, layout: SectionLayout) -> RevealHandle {
    let handle = register(section_id, layout);
    Effect::new(move |_| handle.observe(ViewportEvent::Entered));
    handle
}
