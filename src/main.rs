use anyhow::{Context, Result};
use rune_config::EditConfig;
use rune_input::{
    Color, EventHandler, InputBox, KeyCode, KeyEvent, PointerEvent, RenderSink,
};
use rune_text::{FontFace, FontMeasure, MonospaceMeasure, Point, Rect, TextMeasure};

/// Frame time used when replaying the scripted session.
const FRAME_DT: f32 = 1.0 / 60.0;

/// One step of the scripted editing session.
enum Step {
    Type(&'static str),
    Key(KeyCode),
    Drag { from: f32, to: f32 },
    Wait(f32),
    Focus(bool),
}

/// Sink that reports draw calls through the log.
struct LogSink {
    frame: usize,
}

impl RenderSink for LogSink {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        tracing::info!(
            frame = self.frame,
            "fill x={:.1} y={:.1} w={:.1} h={:.1} alpha={}",
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            color.a
        );
    }

    fn draw_text(&mut self, origin: Point, text: &str, _color: Color, clip: Rect) {
        tracing::info!(
            frame = self.frame,
            "text {text:?} at x={:.1} clip=[{:.1}, {:.1}]",
            origin.x,
            clip.left(),
            clip.right()
        );
    }
}

fn build_measure(config: &EditConfig) -> Result<Box<dyn TextMeasure>> {
    let size = config.text.font_size;
    match &config.text.font {
        Some(path) => {
            let face = FontFace::from_path(path, 0)
                .with_context(|| format!("loading font {}", path.display()))?;
            Ok(Box::new(FontMeasure::new(face, size)))
        }
        None => Ok(Box::new(MonospaceMeasure::new(
            config.text.monospace_advance,
            size * 1.2,
        ))),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EditConfig::load();
    let measure = build_measure(&config)?;
    let mut input = InputBox::from_config(Point::new(10.0, 10.0), &config, measure.as_ref(), "");
    input.set_focused(true);

    let y = input.content_rect().y + 1.0;
    let script = [
        Step::Type("Hello, rune text input!"),
        Step::Key(KeyCode::Home),
        Step::Drag { from: 12.0, to: 60.0 },
        Step::Type("J"),
        Step::Key(KeyCode::End),
        Step::Key(KeyCode::Backspace),
        Step::Wait(1.2),
        Step::Focus(false),
        Step::Wait(1.0),
    ];

    let mut sink = LogSink { frame: 0 };
    for step in script {
        match step {
            Step::Type(s) => {
                for ch in s.chars() {
                    input.handle_key(&KeyEvent::typed(ch));
                }
            }
            Step::Key(key) => {
                input.handle_key(&KeyEvent::press(key));
            }
            Step::Drag { from, to } => {
                let m = measure.as_ref();
                input.handle_pointer_down(m, &PointerEvent::new(from, y));
                input.handle_pointer_move(m, &PointerEvent::new(to, y));
                input.handle_pointer_up(&PointerEvent::new(to, y));
                tracing::info!(selected = ?input.selected_text(), "drag finished");
            }
            Step::Wait(seconds) => {
                let mut elapsed = 0.0;
                while elapsed < seconds {
                    input.update(FRAME_DT);
                    elapsed += FRAME_DT;
                }
            }
            Step::Focus(focused) => input.set_focused(focused),
        }

        sink.frame += 1;
        input.render(measure.as_ref(), &mut sink);
        tracing::info!(
            frame = sink.frame,
            text = input.text(),
            caret = input.caret(),
            scroll = input.scroll_offset(),
            "frame complete"
        );
    }

    Ok(())
}
