
use folio_tui::render::ScreenRenderer;
use folio_tui::TerminalCmd;
use pretty_assertions::assert_eq;

fn cmds_to_bytes(cmds: Vec<TerminalCmd>) -> String {
    cmds.iter().map(TerminalCmd::encode).collect()
}

fn rows(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[test]
fn golden_first_render() {
    let expected = fixture::read_unescaped("renderer_first_render.txt");
    let mut renderer = ScreenRenderer::new();
    let output = cmds_to_bytes(renderer.render(rows(&["hello"]), 10, 2));
    assert_eq!(output, expected);
}

#[test]
fn golden_width_change_full_clear() {
    let expected = fixture::read_unescaped("renderer_width_change_clear.txt");
    let mut renderer = ScreenRenderer::new();
    renderer.render(rows(&["hi"]), 4, 1);

    let output = cmds_to_bytes(renderer.render(rows(&["hi"]), 5, 1));
    assert_eq!(output, expected);
}

#[test]
fn golden_diff_one_line() {
    let expected = fixture::read_unescaped("renderer_diff_one_line.txt");
    let mut renderer = ScreenRenderer::new();
    renderer.render(rows(&["one", "two"]), 5, 2);

    let output = cmds_to_bytes(renderer.render(rows(&["one", "tWO"]), 5, 2));
    assert_eq!(output, expected);
}

#[test]
fn golden_truncated_row() {
    let expected = fixture::read_unescaped("renderer_truncate.txt");
    let mut renderer = ScreenRenderer::new();
    let output = cmds_to_bytes(renderer.render(rows(&["abcdef"]), 4, 1));
    assert_eq!(output, expected);
}

#[test]
fn requested_full_redraw_repaints_unchanged_rows() {
    let mut renderer = ScreenRenderer::new();
    renderer.render(rows(&["same"]), 4, 1);
    assert!(renderer.render(rows(&["same"]), 4, 1).is_empty());

    renderer.request_full_redraw_next();
    let output = cmds_to_bytes(renderer.render(rows(&["same"]), 4, 1));
    assert!(output.contains("\x1b[2J"));
    assert_eq!(renderer.full_redraws(), 2);
}
