//! Property tests for the layout engine
//!
//! Inputs are built from whole fragments: ASCII, accented and combining
//! text, wide CJK, emoji with and without U+FE0F, complete SGR sequences,
//! and escapes that never terminate. Concatenating fragments can splice a
//! broken escape into a complete sequence, which is where `measure` and
//! `truncate` are most likely to disagree.

use bankterm::style::{has_styles, Sgr};
use bankterm::text::justify;
use bankterm::{
    gradient, measure, render_box, render_panel, render_progress_bar, side_by_side,
    strip_styles, truncate, Align, BarStyle, BoxStyle, Palette, PanelStyle, Rgb,
};
use proptest::prelude::*;

const TEXT: &[&str] = &[
    "a", "Z", "7", "1", " ", "R$", "-", "|", "[", "m", ";", "á", "ç", "Ñ", "e\u{301}", "\u{301}",
    "日", "本語", "한", "ｱ", "✅", "✅\u{FE0F}", "⚠\u{FE0F}", "💰", "👥", "\u{FE0F}", "─", "║",
];

/// Escapes that are not (yet) a complete sequence
const BROKEN: &[&str] = &["\x1b", "\x1b[", "\x1b[3", "\x1b[31", "\x1b[1;"];

const STYLES: &[&str] = &[
    "\x1b[0m",
    "\x1b[1m",
    "\x1b[2m",
    "\x1b[31m",
    "\x1b[1;36m",
    "\x1b[38;2;255;215;0m",
    "\x1b[m",
];

fn text_fragment() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        4 => prop::sample::select(TEXT),
        1 => prop::sample::select(BROKEN),
    ]
}

fn fragment() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        3 => text_fragment(),
        1 => prop::sample::select(STYLES),
    ]
}

fn styled_text() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..24).prop_map(|parts| parts.concat())
}

/// No style sequences, but possibly broken escapes
fn plain_text() -> impl Strategy<Value = String> {
    prop::collection::vec(text_fragment(), 0..24).prop_map(|parts| parts.concat())
}

/// No escapes at all
fn clean_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(TEXT), 0..24).prop_map(|parts| parts.concat())
}

fn align() -> impl Strategy<Value = Align> {
    prop_oneof![Just(Align::Start), Just(Align::End), Just(Align::Center)]
}

proptest! {
    #[test]
    fn strip_keeps_width(s in styled_text()) {
        prop_assert_eq!(measure(&strip_styles(&s)), measure(&s));
    }

    #[test]
    fn strip_leaves_no_sequence(s in styled_text()) {
        let stripped = strip_styles(&s);
        prop_assert!(!has_styles(&stripped), "{:?}", stripped);
        prop_assert_eq!(strip_styles(&stripped), stripped);
    }

    #[test]
    fn truncate_fits_limit(s in styled_text(), n in 0usize..40) {
        prop_assert!(measure(&truncate(&s, n)) <= n);
    }

    #[test]
    fn truncate_keeps_what_fits(s in styled_text(), n in 1usize..40) {
        prop_assume!(measure(&s) <= n);
        prop_assert_eq!(truncate(&s, n), s);
    }

    #[test]
    fn truncate_is_idempotent(s in styled_text(), n in 0usize..40) {
        let once = truncate(&s, n);
        prop_assert_eq!(truncate(&once, n), once);
    }

    #[test]
    fn truncated_styles_are_reset(s in styled_text(), n in 1usize..40) {
        let out = truncate(&s, n);
        if out != s && has_styles(&out) {
            prop_assert!(out.ends_with(Sgr::RESET), "{:?}", out);
        }
    }

    #[test]
    fn justify_hits_width(s in styled_text(), w in 0usize..60, a in align()) {
        prop_assert_eq!(measure(&justify(&s, w, a)), w);
    }

    #[test]
    fn box_rows_have_declared_width(
        title in plain_text(),
        lines in prop::collection::vec(styled_text(), 0..6),
        width in 10usize..90,
    ) {
        let style = BoxStyle::new(&Palette::classic()).width(width);
        let block = render_box(&title, &lines, &style);
        for row in block.lines() {
            prop_assert_eq!(measure(row), width, "{:?}", row);
        }
    }

    #[test]
    fn panels_line_up_side_by_side(
        a in prop::collection::vec(styled_text(), 0..5),
        b in prop::collection::vec(styled_text(), 0..5),
        interior in 8usize..40,
    ) {
        let style = PanelStyle::new(&Palette::classic()).interior(interior);
        let left = render_panel("A", &a, &style);
        let right = render_panel("B", &b, &style);
        let rows = side_by_side(&[left, right], 2);
        prop_assert_eq!(rows.len(), 3 + a.len().max(b.len()) + 1);
        for row in &rows {
            prop_assert_eq!(measure(row), 2 + 2 * (interior + 2) + 2);
        }
    }

    #[test]
    fn progress_bar_is_width_cells(value in -1e6f64..1e6, max in -10f64..1e6, width in 1usize..60) {
        let bar = render_progress_bar(value, max, width, &BarStyle::new(&Palette::classic()));
        prop_assert_eq!(measure(&bar), width);
    }

    #[test]
    fn gradient_sequences_are_terminated(s in clean_text()) {
        let out = gradient(&s, Rgb::new(255, 215, 0), Rgb::new(255, 140, 0));
        prop_assert!(!strip_styles(&out).contains('\x1b'));
        prop_assert_eq!(measure(&out), measure(&s));
        if out.contains('\x1b') {
            prop_assert!(out.ends_with(Sgr::RESET));
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fixed examples
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn center_puts_extra_space_on_the_right() {
    assert_eq!(justify("x", 4, Align::Center), " x  ");
}

#[test]
fn spliced_sequence_fits_unchanged() {
    let s = "\x1b[3\x1b[0m1mX";
    assert_eq!(measure(s), 1);
    assert_eq!(truncate(s, 1), s);
    assert_eq!(justify(s, 3, Align::Start), format!("{}  ", s));
}

#[test]
fn lone_wide_glyph() {
    assert_eq!(truncate("日", 1), "");
    assert_eq!(truncate("日", 2), "日");
}

#[test]
fn progress_bar_edges() {
    let style = BarStyle::new(&Palette::classic()).fill("").muted("");
    let split = |bar: String| {
        let plain = strip_styles(&bar);
        (
            plain.chars().filter(|&c| c == '█').count(),
            plain.chars().filter(|&c| c == '░').count(),
        )
    };
    assert_eq!(split(render_progress_bar(0.0, 100.0, 10, &style)), (0, 10));
    assert_eq!(split(render_progress_bar(150.0, 100.0, 10, &style)), (10, 0));
    assert_eq!(split(render_progress_bar(5.0, 0.0, 10, &style)), (0, 10));
}
