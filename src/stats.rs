//! Count-up animation for the hero statistics.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each `.stats .num` figure is parsed once from its rendered text, flagged
//! with `data-animated="true"`, and counted from zero to its target over a
//! fixed duration with an ease-out cubic curve. The run is triggered the first
//! time the statistics block is a quarter visible, or on `load` when the
//! browser has no `IntersectionObserver`.
//!
//! DESIGN
//! ======
//! Parsing, easing and formatting are pure. [`StatNode`] abstracts the figure
//! element so the skip/mark/render rules are testable without a browser.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::consts::{ANIMATED_DATA_KEY, REDUCED_MOTION_QUERY};
use crate::context::PageContext;
use crate::dom;
use crate::error::{Error, Result};
use crate::frame::{self, FrameControl, FrameHandle};

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

// =============================================================================
// PARSING AND EASING
// =============================================================================

/// Parsed figure: the number to count to and the suffix to keep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatTarget {
    pub value: u64,
    pub suffix: String,
}

/// Parse a figure's rendered text.
///
/// A trailing `+` is kept as the suffix. All non-digit characters are dropped
/// and the remaining digits form the target. Returns `None` when there are no
/// digits, the target is zero, or it does not fit in a `u64`.
#[must_use]
pub fn parse_stat(text: &str) -> Option<StatTarget> {
    let trimmed = text.trim();
    let suffix = if trimmed.ends_with('+') { "+" } else { "" };
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    let value = digits.parse::<u64>().unwrap_or(0);
    (value > 0).then(|| StatTarget { value, suffix: suffix.to_owned() })
}

/// `1 - (1 - t)^3`, with `t` clamped to `[0, 1]`.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// One animation frame's output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountFrame {
    pub value: u64,
    pub done: bool,
}

/// Timing of a single count-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    target: u64,
    start_ms: f64,
    duration_ms: f64,
}

impl CountUp {
    #[must_use]
    pub fn new(target: u64, start_ms: f64, duration_ms: f64) -> Self {
        Self { target, start_ms, duration_ms }
    }

    /// Elapsed fraction in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn frame(&self, now_ms: f64) -> CountFrame {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return CountFrame { value: self.target, done: true };
        }
        let value = (self.target as f64 * ease_out_cubic(t)).round() as u64;
        CountFrame { value: value.min(self.target), done: false }
    }
}

// =============================================================================
// FORMATTING
// =============================================================================

/// Group digits in threes with `,`.
#[must_use]
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// How figures are rendered while counting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NumberFormat {
    /// `Number.prototype.toLocaleString` for the given locale.
    Locale(String),
    /// Comma grouping, used when the browser reports no language.
    Grouped,
}

impl NumberFormat {
    /// Locale format for the navigator's language.
    #[must_use]
    pub fn for_window(window: &Window) -> Self {
        Self::for_language(window.navigator().language())
    }

    #[must_use]
    pub fn for_language(language: Option<String>) -> Self {
        match language {
            Some(locale) if !locale.trim().is_empty() => Self::Locale(locale),
            _ => Self::Grouped,
        }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn format(&self, value: u64) -> String {
        match self {
            Self::Locale(locale) => js_sys::Number::from(value as f64).to_locale_string(locale).into(),
            Self::Grouped => format_grouped(value),
        }
    }

    #[must_use]
    pub fn render(&self, value: u64, suffix: &str) -> String {
        format!("{}{suffix}", self.format(value))
    }
}

/// Whether the user asked the system for reduced motion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Motion {
    #[default]
    Full,
    Reduced,
}

impl Motion {
    #[must_use]
    pub fn for_window(window: &Window) -> Self {
        match window.match_media(REDUCED_MOTION_QUERY) {
            Ok(Some(query)) if query.matches() => Self::Reduced,
            Ok(_) => Self::Full,
            Err(err) => {
                log::warn!("{}", Error::dom("matchMedia", &err));
                Self::Full
            }
        }
    }
}

// =============================================================================
// FIGURES
// =============================================================================

/// A statistic figure on the page.
pub trait StatNode {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    fn is_animated(&self) -> bool;

    /// # Errors
    ///
    /// Returns an error when the flag cannot be written.
    fn mark_animated(&self) -> Result<()>;

    /// Whether the node is still attached to the document.
    fn is_live(&self) -> bool;
}

impl StatNode for HtmlElement {
    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn is_animated(&self) -> bool {
        self.dataset().get(ANIMATED_DATA_KEY).as_deref() == Some("true")
    }

    fn mark_animated(&self) -> Result<()> {
        self.dataset()
            .set(ANIMATED_DATA_KEY, "true")
            .map_err(|err| Error::dom("dataset.set", &err))
    }

    fn is_live(&self) -> bool {
        self.is_connected()
    }
}

/// Claim a figure for animation.
///
/// Returns `None`, leaving the node untouched, when it was already animated
/// or its text has no positive target. Otherwise the node is flagged and the
/// parsed target returned.
///
/// # Errors
///
/// Propagates [`StatNode::mark_animated`] failures.
pub fn claim(node: &impl StatNode) -> Result<Option<StatTarget>> {
    if node.is_animated() {
        return Ok(None);
    }
    let Some(target) = parse_stat(&node.text()) else {
        return Ok(None);
    };
    node.mark_animated()?;
    Ok(Some(target))
}

/// A claimed figure that still needs its count-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountStart {
    pub target: StatTarget,
    /// Text shown once the count-up completes.
    pub final_text: String,
}

/// Claim a figure and decide how it is shown.
///
/// Returns `None` when the figure is skipped, or when reduced motion is
/// requested, in which case the final value has already been written.
///
/// # Errors
///
/// Propagates [`claim`] failures.
pub fn begin(node: &impl StatNode, motion: Motion, format: &NumberFormat) -> Result<Option<CountStart>> {
    let Some(target) = claim(node)? else {
        return Ok(None);
    };
    let final_text = format.render(target.value, &target.suffix);
    if motion == Motion::Reduced {
        node.set_text(&final_text);
        return Ok(None);
    }
    Ok(Some(CountStart { target, final_text }))
}

/// Render one frame onto `node`. Stops without writing once the node has left
/// the document.
pub fn step(node: &impl StatNode, count: &CountUp, suffix: &str, format: &NumberFormat, now_ms: f64) -> FrameControl {
    if !node.is_live() {
        return FrameControl::Stop;
    }
    let frame = count.frame(now_ms);
    node.set_text(&format.render(frame.value, suffix));
    if frame.done { FrameControl::Stop } else { FrameControl::Continue }
}

// =============================================================================
// COUNTER
// =============================================================================

struct Running {
    handle: FrameHandle,
    node: HtmlElement,
    final_text: String,
}

/// Runs the count-up over every figure on the page.
pub struct StatsCounter {
    ctx: PageContext,
    motion: Motion,
    format: NumberFormat,
    running: RefCell<Vec<Running>>,
}

impl StatsCounter {
    #[must_use]
    pub fn new(ctx: &PageContext) -> Self {
        Self {
            ctx: ctx.clone(),
            motion: Motion::for_window(&ctx.window),
            format: NumberFormat::for_window(&ctx.window),
            running: RefCell::new(Vec::new()),
        }
    }

    /// Animate every unclaimed figure. Safe to call repeatedly.
    ///
    /// # Errors
    ///
    /// Returns DOM failures from the figure lookup. Failures on individual
    /// figures are logged and skipped.
    pub fn run(&self) -> Result<()> {
        let figures = dom::query_all(&self.ctx.document, &self.ctx.config.stat_number_selector)?;
        for el in figures {
            let Some(el) = el.dyn_ref::<HtmlElement>() else {
                continue;
            };
            if let Err(err) = self.start(el) {
                log::warn!("statistic count-up failed: {err}");
            }
        }
        Ok(())
    }

    fn start(&self, el: &HtmlElement) -> Result<()> {
        let Some(CountStart { target, final_text }) = begin(el, self.motion, &self.format)? else {
            return Ok(());
        };

        let count = CountUp::new(target.value, now_ms(&self.ctx.window), self.ctx.config.count_up_duration_ms);
        let node = el.clone();
        let format = self.format.clone();
        let suffix = target.suffix;
        let handle = frame::run(&self.ctx.window, move |timestamp| step(&node, &count, &suffix, &format, timestamp))?;

        let mut running = self.running.borrow_mut();
        running.retain(|r| r.handle.is_active());
        running.push(Running { handle, node: el.clone(), final_text });
        Ok(())
    }

    /// Cancel in-flight animations and show their final values.
    pub fn finish_all(&self) {
        for running in self.running.borrow_mut().drain(..) {
            if !running.handle.is_active() {
                continue;
            }
            if let Err(err) = running.handle.cancel() {
                log::warn!("cancelling count-up failed: {err}");
            }
            if running.node.is_live() {
                running.node.set_text(&running.final_text);
            }
        }
    }
}

fn now_ms(window: &Window) -> f64 {
    window.performance().map_or_else(js_sys::Date::now, |p| p.now())
}

fn has_intersection_observer(window: &Window) -> bool {
    Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Trigger the count-up when the statistics block becomes visible.
///
/// # Errors
///
/// Returns DOM failures from lookups, observer creation, or listener
/// registration.
pub fn wire(ctx: &PageContext) -> Result<()> {
    let counter = Rc::new(StatsCounter::new(ctx));

    let on_hide = Rc::clone(&counter);
    dom::listen(&ctx.window, "pagehide", move |_| on_hide.finish_all())?;

    if !has_intersection_observer(&ctx.window) {
        log::debug!("IntersectionObserver unavailable, counting up on load");
        return dom::listen_with(&ctx.window, "load", &dom::once(), move |_| {
            if let Err(err) = counter.run() {
                log::warn!("statistic count-up failed: {err}");
            }
        });
    }

    let Some(container) = dom::query_first(&ctx.document, &ctx.config.stats_container_selectors)? else {
        log::debug!("no statistics block, count-up disabled");
        return Ok(());
    };

    let cb = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .any(|entry| entry.dyn_ref::<IntersectionObserverEntry>().is_some_and(IntersectionObserverEntry::is_intersecting));
            if !visible {
                return;
            }
            observer.disconnect();
            if let Err(err) = counter.run() {
                log::warn!("statistic count-up failed: {err}");
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(ctx.config.stats_visibility_threshold));
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)
        .map_err(|err| Error::dom("IntersectionObserver", &err))?;
    observer.observe(&container);
    // Observer callback lives as long as the page.
    cb.forget();
    Ok(())
}
