use mandelbrot_viewer::controllers::frame_loop::{FrameLoop, FrameStatus};
use mandelbrot_viewer::controllers::interactive::{InputEvent, Key};
use mandelbrot_viewer::controllers::ports::pixel_sink::PixelSink;
use mandelbrot_viewer::core::actions::render_frame::RenderStrategy;
use mandelbrot_viewer::core::data::pixel_buffer::PixelBuffer;
use mandelbrot_viewer::presenters::terminal::text::TextPresenter;
use mandelbrot_viewer::config::parse_config;
use mandelbrot_viewer::{AppConfig, terminal_controller};

fn text_of(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_terminal_frame_is_symmetric_and_bounded() {
    let mut out = Vec::new();

    terminal_controller(&mut out).unwrap();

    let text = text_of(out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 22);
    assert!(text.contains('x'));
    // row 11 holds the real axis
    for d in 1..=10 {
        assert_eq!(lines[11 - d], lines[11 + d]);
    }
}

#[test]
fn test_configured_session_renders_through_text_presenter() {
    let report = parse_config(
        "screen_width 20\nscreen_height = 10\nmax_iterations 40\nparallelism scoped\nthreads 3\n",
        AppConfig::default(),
    );
    assert!(report.warnings.is_empty());
    let config = report.config;
    assert_eq!(config.parallelism, RenderStrategy::ScopedThreads);

    let mut frame_loop = FrameLoop::from_config(&config).unwrap();
    let mut presenter = TextPresenter::new(Vec::new());

    for _ in 0..40 {
        assert_eq!(frame_loop.step(&[], &mut presenter).unwrap(), FrameStatus::Continue);
    }
    assert_eq!(frame_loop.budget().current(), 40);

    let text = text_of(presenter.into_inner());
    let last_frame: Vec<&str> = text.lines().rev().take(10).collect();
    assert_eq!(last_frame.len(), 10);
    assert!(last_frame.iter().all(|line| line.len() == 40));
    assert!(last_frame.iter().any(|line| line.contains('x')));
}

#[test]
fn test_quit_key_ends_session_before_presenting() {
    struct Counting(usize);

    impl PixelSink for Counting {
        type Error = std::convert::Infallible;

        fn present(&mut self, _: &PixelBuffer) -> Result<(), Self::Error> {
            self.0 += 1;
            Ok(())
        }
    }

    let config = AppConfig {
        screen_width: 16,
        screen_height: 12,
        ..AppConfig::default()
    };
    let mut frame_loop = FrameLoop::from_config(&config).unwrap();
    let mut sink = Counting(0);

    frame_loop.step(&[], &mut sink).unwrap();
    let status = frame_loop
        .step(&[InputEvent::KeyPressed(Key::Escape)], &mut sink)
        .unwrap();

    assert_eq!(status, FrameStatus::Quit);
    assert_eq!(sink.0, 1);
}
