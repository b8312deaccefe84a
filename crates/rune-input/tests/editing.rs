use anyhow::{Context, Result, ensure};
use rune_input::{
    Color, EventHandler, FrameGeometry, InputBox, KeyCode, KeyEvent, PointerEvent, RenderSink,
};
use rune_text::{GlyphLocator, MonospaceMeasure, Point, Rect, TextMeasure};

const MEASURE: MonospaceMeasure = MonospaceMeasure {
    advance: 10.0,
    line_height: 16.0,
};

fn focused(text: &str, width: f32) -> InputBox {
    let mut input = InputBox::new(Rect::new(0.0, 0.0, width, 16.0), text);
    input.set_focused(true);
    input
}

fn press(input: &mut InputBox, key: KeyCode) {
    input.handle_key(&KeyEvent::press(key));
}

fn type_str(input: &mut InputBox, s: &str) {
    for ch in s.chars() {
        input.handle_key(&KeyEvent::typed(ch));
    }
}

fn drag(input: &mut InputBox, from_index: usize, to_index: usize) {
    // Aim just right of each boundary so the locator resolves to it.
    let x = |i: usize| i as f32 * MEASURE.advance + 1.0 + input.scroll_offset();
    let (from, to) = (x(from_index), x(to_index));
    input.handle_pointer_down(&MEASURE, &PointerEvent::new(from, 8.0));
    input.handle_pointer_move(&MEASURE, &PointerEvent::new(to, 8.0));
    input.handle_pointer_up(&PointerEvent::new(to, 8.0));
}

#[test]
fn backspace_removes_one_cluster_left_of_caret() {
    let text = "editing";
    for i in 0..=text.len() {
        let mut input = focused(text, 200.0);
        input.set_caret(i);
        press(&mut input, KeyCode::Backspace);
        if i > 0 {
            assert_eq!(input.buffer().len(), text.len() - 1);
            assert_eq!(input.caret(), i - 1);
        } else {
            assert_eq!(input.text(), text);
            assert_eq!(input.caret(), 0);
        }
    }
}

#[test]
fn delete_removes_one_cluster_at_caret() {
    let text = "editing";
    for i in 0..=text.len() {
        let mut input = focused(text, 200.0);
        input.set_caret(i);
        press(&mut input, KeyCode::Delete);
        if i < text.len() {
            assert_eq!(input.buffer().len(), text.len() - 1);
            assert_eq!(input.caret(), i);
        } else {
            assert_eq!(input.text(), text);
            assert_eq!(input.caret(), text.len());
        }
    }
}

#[test]
fn home_is_idempotent() {
    let mut once = focused("hello", 200.0);
    drag(&mut once, 1, 4);
    press(&mut once, KeyCode::Home);

    let mut twice = focused("hello", 200.0);
    drag(&mut twice, 1, 4);
    press(&mut twice, KeyCode::Home);
    press(&mut twice, KeyCode::Home);

    assert_eq!(once.caret(), 0);
    assert_eq!(once.selection_range(), None);
    assert_eq!(twice.caret(), once.caret());
    assert_eq!(twice.selection(), once.selection());
}

#[test]
fn selection_rect_does_not_depend_on_drag_direction() {
    let mut forward = focused("selection", 200.0);
    drag(&mut forward, 2, 7);
    let mut backward = focused("selection", 200.0);
    drag(&mut backward, 7, 2);

    assert_eq!(backward.selection_range(), Some((2, 7)));
    assert_eq!(forward.selection_range(), backward.selection_range());

    let forward_rect = forward.frame(&MEASURE).selection;
    let backward_rect = backward.frame(&MEASURE).selection;
    assert_eq!(forward_rect, Some(Rect::new(20.0, 0.0, 50.0, 16.0)));
    assert_eq!(forward_rect, backward_rect);
}

#[test]
fn typing_over_a_range_replaces_it() {
    let mut input = focused("hello", 200.0);
    drag(&mut input, 1, 4);
    assert_eq!(input.selected_text(), Some("ell"));
    type_str(&mut input, "X");
    assert_eq!(input.text(), "hXo");
    assert_eq!(input.caret(), 2);
}

#[test]
fn caret_stays_inside_a_narrow_clip() -> Result<()> {
    let mut input = focused("", 55.0);
    type_str(&mut input, "a rather long line of text");
    let clip = input.content_rect();

    let check = |input: &mut InputBox| -> Result<()> {
        let frame = input.frame(&MEASURE);
        let caret = frame.caret.context("caret hidden while focused")?;
        ensure!(
            caret.x >= clip.left() && caret.x <= clip.right(),
            "caret {} outside [{}, {}]",
            caret.x,
            clip.left(),
            clip.right()
        );
        Ok(())
    };

    check(&mut input)?;
    assert!(input.scroll_offset() < 0.0);

    press(&mut input, KeyCode::Home);
    check(&mut input)?;
    assert_eq!(input.scroll_offset(), 0.0);

    press(&mut input, KeyCode::End);
    check(&mut input)?;
    press(&mut input, KeyCode::ArrowLeft);
    check(&mut input)?;
    Ok(())
}

#[test]
fn pointer_hits_account_for_scrolling() {
    let mut input = focused("0123456789", 50.0);
    press(&mut input, KeyCode::End);
    input.frame(&MEASURE);
    assert_eq!(input.scroll_offset(), -50.0);

    // Screen x=21 is text x=71, just right of boundary 7.
    input.handle_pointer_down(&MEASURE, &PointerEvent::new(21.0, 8.0));
    assert_eq!(input.caret(), 7);
}

#[test]
fn locator_round_trips_every_boundary() {
    let text = "boundaries";
    let origin = Point::new(3.0, 0.0);
    for i in 0..=text.len() {
        let pos = GlyphLocator::position_of(&MEASURE, text, origin, i);
        assert_eq!(GlyphLocator::locate(&MEASURE, text, origin, pos), i);
    }
}

#[test]
fn arrow_and_end_scenario() {
    let mut input = focused("cat", 200.0);
    press(&mut input, KeyCode::End);
    assert_eq!(input.caret(), 3);

    press(&mut input, KeyCode::ArrowLeft);
    press(&mut input, KeyCode::ArrowLeft);
    assert_eq!(input.caret(), 1);

    press(&mut input, KeyCode::ArrowLeft);
    assert_eq!(input.caret(), 0);
    press(&mut input, KeyCode::ArrowLeft);
    assert_eq!(input.caret(), 0);

    press(&mut input, KeyCode::End);
    assert_eq!(input.caret(), 3);
    assert_eq!(input.selection_range(), None);
}

#[derive(Default)]
struct Recorder {
    texts: Vec<String>,
    rects: Vec<(Rect, Color)>,
}

impl RenderSink for Recorder {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.rects.push((rect, color));
    }

    fn draw_text(&mut self, _origin: Point, text: &str, _color: Color, _clip: Rect) {
        self.texts.push(text.to_string());
    }
}

#[test]
fn masked_text_renders_mask_but_edits_real_text() {
    let mut masked = focused("secret", 200.0).with_mask(Some('*'));
    let mut plain = focused("secret", 200.0);

    let mut sink = Recorder::default();
    masked.render(&MEASURE, &mut sink);
    assert_eq!(sink.texts, vec!["******"]);

    for input in [&mut masked, &mut plain] {
        input.handle_pointer_down(&MEASURE, &PointerEvent::new(33.0, 8.0));
    }
    assert_eq!(masked.caret(), 3);
    assert_eq!(masked.caret(), plain.caret());

    press(&mut masked, KeyCode::Backspace);
    assert_eq!(masked.text(), "seret");
    assert_eq!(masked.display_text().as_str(), "*****");

    let frame: FrameGeometry = masked.frame(&MEASURE);
    assert_eq!(frame.caret.map(|r| r.x), Some(20.0));
}

#[test]
fn blink_only_runs_while_focused() {
    let mut input = focused("abc", 200.0);
    input.update(0.53);
    assert!(input.frame(&MEASURE).caret.is_none());
    input.update(0.53);
    assert!(input.frame(&MEASURE).caret.is_some());

    input.set_focused(false);
    input.update(10.0);
    assert!(input.frame(&MEASURE).caret.is_none());
    assert!(!input.is_caret_visible());

    input.set_focused(true);
    assert!(input.frame(&MEASURE).caret.is_some());
}

#[test]
fn render_draws_selection_under_caret() {
    let mut input = focused("hello", 200.0);
    drag(&mut input, 4, 1);
    let mut sink = Recorder::default();
    input.render(&MEASURE, &mut sink);

    assert_eq!(sink.texts, vec!["hello"]);
    assert_eq!(sink.rects.len(), 2);
    let (selection, selection_color) = sink.rects[0];
    let (caret, caret_color) = sink.rects[1];
    assert_eq!(selection, Rect::new(10.0, 0.0, 30.0, 16.0));
    assert_eq!(selection_color, Color::BLACK.with_alpha(0.25));
    assert_eq!(caret, Rect::new(10.0, 0.0, 1.0, MEASURE.line_height()));
    assert_eq!(caret_color, input.text_color);
}
