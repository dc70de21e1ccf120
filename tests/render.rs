use cairo::{Context, ImageSurface};
use overscribe::draw::PaletteColor;
use overscribe::input::{Command, InputState, StrokeWidth};

fn make_input_state() -> InputState {
    let mut state = InputState::with_defaults(PaletteColor::Red, StrokeWidth::Px5, true);
    state.update_screen_dimensions(200, 200);
    state
}

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn painted_pixels_in(surface: &mut ImageSurface, x0: i32, y0: i32, x1: i32, y1: i32) -> usize {
    let width = surface.width();
    let height = surface.height();
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let mut count = 0;
    for y in y0..y1 {
        for x in x0..x1 {
            if x < 0 || y < 0 || x >= width || y >= height {
                continue;
            }
            let offset = y as usize * stride + x as usize * 4;
            if data[offset..offset + 4].iter().any(|b| *b != 0) {
                count += 1;
            }
        }
    }
    count
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    painted_pixels_in(surface, 0, 0, 200, 200) > 0
}

#[test]
fn committed_and_in_progress_strokes_render() {
    let mut state = make_input_state();

    // One committed stroke, one still in progress.
    state.on_pointer_down(20, 20, false);
    state.on_pointer_motion(60, 60);
    state.on_pointer_up();
    state.on_pointer_down(120, 120, false);
    state.on_pointer_motion(160, 160);

    let (mut surface, ctx) = surface_with_context(200, 200);
    state.render(&ctx);
    drop(ctx);

    assert!(painted_pixels_in(&mut surface, 15, 15, 65, 65) > 0);
    assert!(painted_pixels_in(&mut surface, 115, 115, 165, 165) > 0);
}

#[test]
fn single_click_renders_a_dot() {
    let mut state = make_input_state();
    state.on_pointer_down(100, 100, false);
    state.on_pointer_up();

    let (mut surface, ctx) = surface_with_context(200, 200);
    state.render(&ctx);
    drop(ctx);

    assert!(painted_pixels_in(&mut surface, 95, 95, 105, 105) > 0);
    // Nothing outside the dot's neighborhood.
    assert_eq!(painted_pixels_in(&mut surface, 0, 0, 90, 90), 0);
}

#[test]
fn straight_line_stroke_renders_a_segment() {
    let mut state = make_input_state();
    state.on_pointer_down(10, 100, true);
    state.on_pointer_motion(50, 20);
    state.on_pointer_motion(190, 100);
    state.on_pointer_up();

    let (mut surface, ctx) = surface_with_context(200, 200);
    state.render(&ctx);
    drop(ctx);

    // Pixels along the anchor-to-tip segment...
    assert!(painted_pixels_in(&mut surface, 95, 95, 105, 105) > 0);
    // ...but none near the intermediate point that was collapsed away.
    assert_eq!(painted_pixels_in(&mut surface, 40, 10, 60, 30), 0);
}

#[test]
fn cursor_indicator_renders_while_hovering_only() {
    let mut state = make_input_state();
    state.on_pointer_hover(170, 30);

    let (mut surface, ctx) = surface_with_context(200, 200);
    state.render(&ctx);
    drop(ctx);
    assert!(painted_pixels_in(&mut surface, 165, 25, 175, 35) > 0);

    // Starting a stroke elsewhere clears the indicator.
    state.on_pointer_down(50, 150, false);
    state.on_pointer_motion(60, 160);

    let (mut surface, ctx) = surface_with_context(200, 200);
    state.render(&ctx);
    drop(ctx);
    assert_eq!(painted_pixels_in(&mut surface, 165, 25, 175, 35), 0);
}

#[test]
fn indicator_grows_with_the_pen_width() {
    let mut state = make_input_state();
    state.dispatch(Command::SetWidth(2));
    state.on_pointer_hover(100, 100);

    let (mut surface, ctx) = surface_with_context(200, 200);
    state.render(&ctx);
    drop(ctx);
    let thin = painted_pixels_in(&mut surface, 90, 90, 110, 110);

    state.dispatch(Command::SetWidth(10));
    let (mut surface, ctx) = surface_with_context(200, 200);
    state.render(&ctx);
    drop(ctx);
    let thick = painted_pixels_in(&mut surface, 90, 90, 110, 110);

    assert!(thin > 0);
    assert!(thick > thin);
}

#[test]
fn undo_and_clear_remove_rendered_strokes() {
    let mut state = make_input_state();
    state.on_pointer_down(20, 20, false);
    state.on_pointer_motion(60, 60);
    state.on_pointer_up();

    state.dispatch(Command::Undo);
    let (mut surface, ctx) = surface_with_context(200, 200);
    state.render(&ctx);
    drop(ctx);
    assert!(!surface_has_pixels(&mut surface));

    state.on_pointer_down(20, 20, false);
    state.on_pointer_motion(60, 60);
    state.on_pointer_up();
    state.dispatch(Command::Clear);
    let (mut surface, ctx) = surface_with_context(200, 200);
    state.render(&ctx);
    drop(ctx);
    assert!(!surface_has_pixels(&mut surface));
}

#[test]
fn rendered_frame_can_be_written_as_png() {
    let mut state = make_input_state();
    state.on_pointer_down(20, 180, false);
    for i in 1..=16 {
        state.on_pointer_motion(20 + i * 10, 180 - i * 9);
    }
    state.on_pointer_up();

    let (mut surface, ctx) = surface_with_context(200, 200);
    state.render(&ctx);
    drop(ctx);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");
    let mut file = std::fs::File::create(&path).unwrap();
    surface.write_to_png(&mut file).unwrap();

    let metadata = std::fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0);
}
