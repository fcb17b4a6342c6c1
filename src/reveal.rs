mod clock;
mod timing;

pub use clock::{Clock, ManualClock, WallClock};
pub use timing::{grid_delay, seconds, Easing, Presentation, RevealTiming, HIDDEN_OFFSET_Y};

use std::collections::HashMap;
use std::time::Duration;

/// Intersection ratios reported at a threshold crossing can land just under it.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Boundary crossing reported by the viewport observer for a section container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportEvent {
    Entered,
    Exited,
}

impl ViewportEvent {
    /// Classifies a raw intersection reading against the configured visible-area threshold.
    pub fn from_intersection(is_intersecting: bool, ratio: f64, threshold: f64) -> Self {
        if is_intersecting && ratio + RATIO_TOLERANCE >= threshold {
            ViewportEvent::Entered
        } else {
            ViewportEvent::Exited
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementState {
    Hidden,
    Visible,
}

/// Declared element sequence of a section.
///
/// Each entry is the element's stagger slot, its index within the parent stagger group.
/// Nested elements that animate together with their parent share its slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionLayout {
    slots: Vec<usize>,
}

impl SectionLayout {
    /// One slot per element, in declaration order.
    pub fn sequence(count: usize) -> Self {
        Self {
            slots: (0..count).collect(),
        }
    }

    pub fn from_slots(slots: Vec<usize>) -> Self {
        Self { slots }
    }

    /// Appends `count` elements that share a single new slot after the current last one.
    pub fn then_group(mut self, count: usize) -> Self {
        let slot = self.next_slot();
        self.slots.extend(std::iter::repeat(slot).take(count));
        self
    }

    /// Appends `count` elements, each in its own new slot.
    pub fn then_each(mut self, count: usize) -> Self {
        let start = self.next_slot();
        self.slots.extend(start..start + count);
        self
    }

    /// Appends `count` elements into the current last slot.
    pub fn nested(mut self, count: usize) -> Self {
        let slot = self.slots.last().copied().unwrap_or(0);
        self.slots.extend(std::iter::repeat(slot).take(count));
        self
    }

    fn next_slot(&self) -> usize {
        self.slots.iter().max().map_or(0, |s| s + 1)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, index: usize) -> Option<usize> {
        self.slots.get(index).copied()
    }

    pub fn slot_count(&self) -> usize {
        self.next_slot()
    }
}

/// Identifies one scheduled transition. Tickets from a cancelled or re-registered
/// section are rejected by [`RevealSequencer::fire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    epoch: u64,
    pub element: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledReveal {
    pub ticket: Ticket,
    /// Offset from the trigger at which the transition starts.
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    /// First entry into the viewport; the host should arm one timer per entry.
    Triggered(Vec<ScheduledReveal>),
    Ignored,
}

#[derive(Debug)]
struct Section {
    layout: SectionLayout,
    timing: RevealTiming,
    epoch: u64,
    triggered_at: Option<Duration>,
    cancelled: bool,
    schedule: Vec<ScheduledReveal>,
}

impl Section {
    fn build_schedule(&mut self) {
        let epoch = self.epoch;
        let timing = self.timing;
        let mut schedule = self
            .layout
            .slots
            .iter()
            .enumerate()
            .map(|(element, slot)| ScheduledReveal {
                ticket: Ticket { epoch, element },
                delay: timing.delay_for(*slot),
            })
            .collect::<Vec<_>>();
        schedule.sort_by_key(|s| (s.delay, s.ticket.element));
        self.schedule = schedule;
    }

    fn elapsed(&self, now: Duration) -> Option<Duration> {
        if self.cancelled {
            return None;
        }
        self.triggered_at.map(|t| now.saturating_sub(t))
    }
}

/// Turns one trigger-once visibility signal per section into staggered per-element reveals.
///
/// Element state is derived from the injected clock on every read, so queries never
/// mutate anything. Host timers only decide when to re-render, and must check
/// [`RevealSequencer::fire`] before doing so.
pub struct RevealSequencer<C> {
    clock: C,
    default_timing: RevealTiming,
    sections: HashMap<String, Section>,
    next_epoch: u64,
}

impl<C: Clock> RevealSequencer<C> {
    pub fn new(clock: C) -> Self {
        Self::with_timing(clock, RevealTiming::default())
    }

    pub fn with_timing(clock: C, default_timing: RevealTiming) -> Self {
        Self {
            clock,
            default_timing,
            sections: HashMap::new(),
            next_epoch: 0,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn register(&mut self, section_id: &str, layout: SectionLayout) {
        let timing = self.default_timing;
        self.register_with_timing(section_id, layout, timing);
    }

    /// Creates the section when its host content mounts.
    ///
    /// A live section keeps its trigger and only takes the new layout. A cancelled one is
    /// replaced by a fresh, untriggered section whose tickets are distinct from the old ones.
    pub fn register_with_timing(
        &mut self,
        section_id: &str,
        layout: SectionLayout,
        timing: RevealTiming,
    ) {
        if let Some(section) = self
            .sections
            .get_mut(section_id)
            .filter(|s| !s.cancelled)
        {
            section.layout = layout;
            section.timing = timing;
            if section.triggered_at.is_some() {
                section.build_schedule();
            }
            return;
        }

        let epoch = self.next_epoch;
        self.next_epoch += 1;
        self.sections.insert(
            section_id.to_string(),
            Section {
                layout,
                timing,
                epoch,
                triggered_at: None,
                cancelled: false,
                schedule: Vec::new(),
            },
        );
    }

    pub fn observe(&mut self, section_id: &str, event: ViewportEvent) -> Observation {
        let now = self.clock.now();
        let Some(section) = self.sections.get_mut(section_id) else {
            log::warn!("viewport event for unregistered section {section_id}");
            return Observation::Ignored;
        };
        if section.cancelled || section.triggered_at.is_some() || event == ViewportEvent::Exited {
            return Observation::Ignored;
        }

        section.triggered_at = Some(now);
        section.build_schedule();
        log::debug!(
            "section {section_id} triggered, {} elements over {:?}",
            section.layout.len(),
            section.timing.full_reveal(section.layout.slot_count())
        );
        Observation::Triggered(section.schedule.clone())
    }

    /// Current state of one element.
    ///
    /// `element_index` must be within the section's layout. Out of range indices are a
    /// contract violation and read as `Visible` in release builds. Unregistered sections
    /// also read as `Visible` so their content is shown without animation.
    pub fn element_state(&self, section_id: &str, element_index: usize) -> ElementState {
        let Some(section) = self.sections.get(section_id) else {
            log::warn!("state read for unregistered section {section_id}");
            return ElementState::Visible;
        };
        debug_assert!(
            element_index < section.layout.len(),
            "element {element_index} out of range for section {section_id}"
        );
        let Some(slot) = section.layout.slot(element_index) else {
            return ElementState::Visible;
        };
        match section.elapsed(self.clock.now()) {
            Some(elapsed) if elapsed >= section.timing.delay_for(slot) => ElementState::Visible,
            _ => ElementState::Hidden,
        }
    }

    /// Interpolated style of one element, with the same preconditions as `element_state`.
    pub fn presentation(&self, section_id: &str, element_index: usize) -> Presentation {
        let Some(section) = self.sections.get(section_id) else {
            return Presentation::RESTING;
        };
        debug_assert!(
            element_index < section.layout.len(),
            "element {element_index} out of range for section {section_id}"
        );
        let Some(slot) = section.layout.slot(element_index) else {
            return Presentation::RESTING;
        };
        let Some(elapsed) = section.elapsed(self.clock.now()) else {
            return Presentation::HIDDEN;
        };
        let delay = section.timing.delay_for(slot);
        if elapsed < delay {
            return Presentation::HIDDEN;
        }
        let transition = section.timing.transition();
        let progress = if transition.is_zero() {
            1.0
        } else {
            (elapsed - delay).as_secs_f64() / transition.as_secs_f64()
        };
        Presentation::at(progress, section.timing.easing)
    }

    /// Validates a timer callback. Returns `false` for tickets of a cancelled or replaced section.
    pub fn fire(&self, section_id: &str, ticket: Ticket) -> bool {
        let live = self.sections.get(section_id).is_some_and(|s| {
            !s.cancelled
                && s.epoch == ticket.epoch
                && s.triggered_at.is_some()
                && ticket.element < s.layout.len()
        });
        if !live {
            log::debug!(
                "dropping stale reveal of element {} in {section_id}",
                ticket.element
            );
        }
        live
    }

    /// Invalidates every pending transition of a section. Safe to call repeatedly.
    pub fn cancel(&mut self, section_id: &str) {
        if let Some(section) = self.sections.get_mut(section_id) {
            if !section.cancelled {
                section.cancelled = true;
                section.schedule.clear();
                log::debug!("section {section_id} cancelled");
            }
        }
    }

    /// Ordered `(element, delay)` schedule; empty until the section triggers.
    pub fn schedule(&self, section_id: &str) -> &[ScheduledReveal] {
        self.sections
            .get(section_id)
            .map(|s| s.schedule.as_slice())
            .unwrap_or_default()
    }

    pub fn is_triggered(&self, section_id: &str) -> bool {
        self.sections
            .get(section_id)
            .is_some_and(|s| !s.cancelled && s.triggered_at.is_some())
    }

    pub fn timing(&self, section_id: &str) -> RevealTiming {
        self.sections
            .get(section_id)
            .map_or(self.default_timing, |s| s.timing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn sequencer() -> (Arc<ManualClock>, RevealSequencer<Arc<ManualClock>>) {
        let clock = Arc::new(ManualClock::new());
        let seq = RevealSequencer::new(clock.clone());
        (clock, seq)
    }

    fn states<C: Clock>(seq: &RevealSequencer<C>, id: &str, count: usize) -> Vec<ElementState> {
        (0..count).map(|i| seq.element_state(id, i)).collect()
    }

    #[test]
    fn test_hidden_until_triggered() {
        let (clock, mut seq) = sequencer();
        seq.register("about", SectionLayout::sequence(3));

        clock.advance_secs(10.0);
        assert!(states(&seq, "about", 3)
            .iter()
            .all(|s| *s == ElementState::Hidden));
        assert!(seq.schedule("about").is_empty());

        assert_eq!(seq.observe("about", ViewportEvent::Exited), Observation::Ignored);
        assert!(!seq.is_triggered("about"));
        assert_eq!(seq.element_state("about", 0), ElementState::Hidden);
    }

    #[test]
    fn test_trigger_once() {
        let (clock, mut seq) = sequencer();
        seq.register("projects", SectionLayout::sequence(4));

        let first = seq.observe("projects", ViewportEvent::Entered);
        let Observation::Triggered(schedule) = first else {
            panic!("first entry should trigger");
        };
        assert_eq!(schedule.len(), 4);

        clock.advance_secs(0.1);
        for _ in 0..5 {
            assert_eq!(
                seq.observe("projects", ViewportEvent::Entered),
                Observation::Ignored
            );
            assert_eq!(
                seq.observe("projects", ViewportEvent::Exited),
                Observation::Ignored
            );
        }
        assert_eq!(seq.schedule("projects"), schedule.as_slice());
    }

    #[test]
    fn test_stagger_arithmetic() {
        let (clock, mut seq) = sequencer();
        seq.register("experience", SectionLayout::sequence(3));
        seq.observe("experience", ViewportEvent::Entered);

        let delays = seq
            .schedule("experience")
            .iter()
            .map(|s| (s.ticket.element, s.delay))
            .collect::<Vec<_>>();
        assert_eq!(
            delays,
            vec![
                (0, Duration::from_millis(300)),
                (1, Duration::from_millis(500)),
                (2, Duration::from_millis(700)),
            ]
        );

        clock.advance(Duration::from_millis(699));
        assert_eq!(seq.element_state("experience", 2), ElementState::Hidden);
        clock.advance(Duration::from_millis(1));
        assert_eq!(seq.element_state("experience", 2), ElementState::Visible);
        assert_eq!(seq.presentation("experience", 2), Presentation::HIDDEN);

        clock.advance(Duration::from_millis(500));
        assert_eq!(seq.presentation("experience", 2), Presentation::RESTING);
    }

    #[test]
    fn test_schedule_is_monotonic_with_index_tiebreak() {
        let (_, mut seq) = sequencer();
        let layout = SectionLayout::sequence(2).then_group(3).then_each(2);
        assert_eq!(layout.len(), 7);
        seq.register("about", layout.clone());
        seq.observe("about", ViewportEvent::Entered);

        let schedule = seq.schedule("about");
        for pair in schedule.windows(2) {
            assert!(pair[0].delay <= pair[1].delay);
            if pair[0].delay == pair[1].delay {
                assert!(pair[0].ticket.element < pair[1].ticket.element);
            }
        }
        for i in 0..layout.len() {
            for j in i + 1..layout.len() {
                let find = |e: usize| schedule.iter().find(|s| s.ticket.element == e).unwrap();
                assert!(find(i).delay <= find(j).delay);
            }
        }
    }

    #[test]
    fn test_unsorted_slots_are_scheduled_by_delay() {
        let (_, mut seq) = sequencer();
        seq.register("odd", SectionLayout::from_slots(vec![2, 0, 1, 0]));
        seq.observe("odd", ViewportEvent::Entered);

        let order = seq
            .schedule("odd")
            .iter()
            .map(|s| s.ticket.element)
            .collect::<Vec<_>>();
        assert_eq!(order, vec![1, 3, 2, 0]);
    }

    #[test]
    fn test_never_rehides() {
        let (clock, mut seq) = sequencer();
        seq.register("contact", SectionLayout::sequence(3));
        seq.observe("contact", ViewportEvent::Entered);
        clock.advance_secs(2.0);
        assert!(states(&seq, "contact", 3)
            .iter()
            .all(|s| *s == ElementState::Visible));

        seq.observe("contact", ViewportEvent::Exited);
        clock.advance_secs(1.0);
        seq.observe("contact", ViewportEvent::Entered);
        assert!(states(&seq, "contact", 3)
            .iter()
            .all(|s| *s == ElementState::Visible));
    }

    #[test]
    fn test_cancel_hides_and_rejects_tickets() {
        let (clock, mut seq) = sequencer();
        seq.register("skills", SectionLayout::sequence(3));
        let Observation::Triggered(schedule) = seq.observe("skills", ViewportEvent::Entered) else {
            panic!("should trigger");
        };
        clock.advance_secs(0.4);
        assert!(seq.fire("skills", schedule[0].ticket));

        seq.cancel("skills");
        seq.cancel("skills");
        clock.advance_secs(5.0);

        assert!(states(&seq, "skills", 3)
            .iter()
            .all(|s| *s == ElementState::Hidden));
        assert!(schedule.iter().all(|s| !seq.fire("skills", s.ticket)));
        assert!(seq.schedule("skills").is_empty());
        assert!(!seq.is_triggered("skills"));
        assert_eq!(seq.observe("skills", ViewportEvent::Entered), Observation::Ignored);
    }

    #[test]
    fn test_cancel_from_inside_callback() {
        let (clock, mut seq) = sequencer();
        seq.register("hero", SectionLayout::sequence(2));
        let Observation::Triggered(schedule) = seq.observe("hero", ViewportEvent::Entered) else {
            panic!("should trigger");
        };
        clock.advance_secs(0.3);

        // the first callback tears the section down before the second one runs
        if seq.fire("hero", schedule[0].ticket) {
            seq.cancel("hero");
        }
        clock.advance_secs(1.0);
        assert!(!seq.fire("hero", schedule[1].ticket));
        assert_eq!(seq.element_state("hero", 1), ElementState::Hidden);
    }

    #[test]
    fn test_reregister_after_cancel_starts_fresh() {
        let (clock, mut seq) = sequencer();
        seq.register("about", SectionLayout::sequence(2));
        let Observation::Triggered(old) = seq.observe("about", ViewportEvent::Entered) else {
            panic!("should trigger");
        };
        seq.cancel("about");

        seq.register("about", SectionLayout::sequence(2));
        assert!(!seq.is_triggered("about"));
        let Observation::Triggered(new) = seq.observe("about", ViewportEvent::Entered) else {
            panic!("fresh section should trigger");
        };
        clock.advance_secs(1.0);
        assert!(!seq.fire("about", old[0].ticket));
        assert!(seq.fire("about", new[0].ticket));
    }

    #[test]
    fn test_reregister_live_keeps_trigger() {
        let (clock, mut seq) = sequencer();
        seq.register("projects", SectionLayout::sequence(2));
        seq.observe("projects", ViewportEvent::Entered);
        clock.advance_secs(0.6);

        seq.register("projects", SectionLayout::sequence(4));
        assert!(seq.is_triggered("projects"));
        assert_eq!(seq.schedule("projects").len(), 4);
        assert_eq!(seq.element_state("projects", 1), ElementState::Visible);
        assert_eq!(seq.element_state("projects", 3), ElementState::Hidden);
    }

    #[test]
    fn test_queries_are_pure() {
        let (clock, mut seq) = sequencer();
        seq.register("about", SectionLayout::sequence(2));
        seq.observe("about", ViewportEvent::Entered);
        clock.advance_secs(0.4);

        let before = seq.schedule("about").to_vec();
        for _ in 0..10 {
            assert_eq!(seq.element_state("about", 0), ElementState::Visible);
            assert_eq!(seq.element_state("about", 1), ElementState::Hidden);
            seq.presentation("about", 0);
        }
        assert_eq!(seq.schedule("about"), before.as_slice());
    }

    #[test]
    fn test_unknown_section_degrades_to_visible() {
        let (_, mut seq) = sequencer();
        assert_eq!(seq.observe("nowhere", ViewportEvent::Entered), Observation::Ignored);
        assert_eq!(seq.element_state("nowhere", 0), ElementState::Visible);
        assert_eq!(seq.presentation("nowhere", 0), Presentation::RESTING);
        seq.cancel("nowhere");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_index_is_a_contract_violation() {
        let (_, mut seq) = sequencer();
        seq.register("about", SectionLayout::sequence(1));
        seq.element_state("about", 1);
    }

    #[test]
    fn test_per_section_timing() {
        let (clock, mut seq) = sequencer();
        let timing = RevealTiming::default().with_stagger(0.1);
        seq.register_with_timing("skills", SectionLayout::sequence(3), timing);
        seq.observe("skills", ViewportEvent::Entered);

        assert_eq!(seq.timing("skills"), timing);
        assert_eq!(seq.schedule("skills")[2].delay, Duration::from_millis(500));
        clock.advance_secs(0.5);
        assert_eq!(seq.element_state("skills", 2), ElementState::Visible);
    }

    #[test]
    fn test_threshold_classification() {
        assert_eq!(
            ViewportEvent::from_intersection(true, 0.1, 0.1),
            ViewportEvent::Entered
        );
        assert_eq!(
            ViewportEvent::from_intersection(true, 0.0995, 0.1),
            ViewportEvent::Entered
        );
        assert_eq!(
            ViewportEvent::from_intersection(true, 0.05, 0.1),
            ViewportEvent::Exited
        );
        assert_eq!(
            ViewportEvent::from_intersection(false, 0.5, 0.1),
            ViewportEvent::Exited
        );
    }

    #[test]
    fn test_skills_section_end_to_end() {
        let (clock, mut seq) = sequencer();
        let timing = RevealTiming::default();
        seq.register("skills", SectionLayout::sequence(4));

        let event = ViewportEvent::from_intersection(true, 0.12, 0.1);
        let Observation::Triggered(schedule) = seq.observe("skills", event) else {
            panic!("should trigger");
        };
        assert_eq!(seq.element_state("skills", 0), ElementState::Hidden);

        // host timers fire in schedule order
        let mut shown = Vec::new();
        for reveal in &schedule {
            let now = clock.now();
            if reveal.delay > now {
                clock.advance(reveal.delay - now);
            }
            assert!(seq.fire("skills", reveal.ticket));
            assert_eq!(
                seq.element_state("skills", reveal.ticket.element),
                ElementState::Visible
            );
            shown.push(reveal.ticket.element);
        }
        assert_eq!(shown, vec![0, 1, 2, 3]);

        let bound = timing.full_reveal(4);
        let now = clock.now();
        clock.advance(bound - now);
        assert!(states(&seq, "skills", 4)
            .iter()
            .all(|s| *s == ElementState::Visible));
        assert_eq!(seq.presentation("skills", 3), Presentation::RESTING);
    }
}
