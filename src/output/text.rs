use std::io::{self, Write};

use crate::view::{ListRegion, ListView, ModalView};

pub const EMPTY_PLACEHOLDER: &str = "No tasks yet. Create one to get started!";
pub const LOADING_TEXT: &str = "Loading tasks…";

pub fn write_region(w: &mut impl Write, region: &ListRegion) -> io::Result<()> {
    match region {
        ListRegion::Loading => writeln!(w, "{LOADING_TEXT}"),
        ListRegion::Error(message) => writeln!(w, "⚠ {message}"),
        ListRegion::Content(view) => write_list(w, view),
    }
}

pub fn write_list(w: &mut impl Write, view: &ListView) -> io::Result<()> {
    match view {
        ListView::Empty => writeln!(w, "{EMPTY_PLACEHOLDER}"),
        ListView::Tiles(tiles) => {
            for (n, tile) in tiles.iter().enumerate() {
                writeln!(w, "  {:>2}. {} {}  [{}]", n + 1, tile.glyph, tile.name, tile.status)?;
            }
            Ok(())
        }
    }
}

pub fn write_modal(w: &mut impl Write, m: &ModalView) -> io::Result<()> {
    writeln!(w, "┌─ {} ({})", m.name, m.id)?;
    for line in m.description.lines() {
        writeln!(w, "│ {line}")?;
    }
    writeln!(w, "│ Status:   {}", m.status)?;
    writeln!(w, "│ Priority: {}", m.priority)?;
    writeln!(w, "│ Created:  {}", m.created)?;
    writeln!(w, "└─ [toggle] {}   [delete] Delete   [close] Close", m.toggle_label)
}

pub fn write_alert(w: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(w, "! {message}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskId;
    use crate::view::Tile;

    fn render(region: &ListRegion) -> String {
        let mut buf = Vec::new();
        write_region(&mut buf, region).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn tiles_are_numbered_from_one() {
        let out = render(&ListRegion::Content(ListView::Tiles(vec![
            Tile {
                id: TaskId::Number(10),
                glyph: "✓",
                name: "Ship it".into(),
                status: "completed".into(),
            },
            Tile {
                id: TaskId::Number(11),
                glyph: "⋯",
                name: "Plan".into(),
                status: "pending".into(),
            },
        ])));
        assert_eq!(out, "   1. ✓ Ship it  [completed]\n   2. ⋯ Plan  [pending]\n");
    }

    #[test]
    fn states_render_distinctly() {
        assert_eq!(render(&ListRegion::Loading), format!("{LOADING_TEXT}\n"));
        assert_eq!(render(&ListRegion::Error("down".into())), "⚠ down\n");
        assert_eq!(
            render(&ListRegion::Content(ListView::Empty)),
            format!("{EMPTY_PLACEHOLDER}\n")
        );
    }
}
