//! ConsoleView - line-oriented presentation shell
//!
//! Renders the list and detail pane as text on any `Write` sink.

use std::io::Write;

use crate::adapters::presenters::RowViewModel;
use crate::adapters::views::shortcut_view::ShortcutView;
use crate::domain::repositories::IconData;

/// Text view over a writer (stdout in the binary)
pub struct ConsoleView<W: Write> {
    out: W,
    rows: Vec<String>,
}

impl<W: Write> ConsoleView<W> {
    /// Create a console view writing to `out`
    pub fn new(out: W) -> Self {
        Self {
            out,
            rows: Vec::new(),
        }
    }

    /// Print every row with its index
    pub fn print_list(&mut self) {
        if self.rows.is_empty() {
            self.line("(no shortcuts)");
            return;
        }
        let lines: Vec<String> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| format!("{:>3}  {}", i, row))
            .collect();
        for line in lines {
            self.line(&line);
        }
    }

    /// Write one line
    pub fn line(&mut self, text: &str) {
        // A closed pipe is not worth failing the session over
        let _ = writeln!(self.out, "{}", text);
    }

    /// Take back the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ShortcutView for ConsoleView<W> {
    fn append_rows(&mut self, rows: Vec<RowViewModel>) {
        for row in rows {
            let line = format!("+ {:>3}  {}", self.rows.len(), row.title);
            self.rows.push(row.title);
            self.line(&line);
        }
    }

    fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            let title = self.rows.remove(index);
            self.line(&format!("- {:>3}  {}", index, title));
        }
    }

    fn set_row_text(&mut self, index: usize, text: &str) {
        if let Some(row) = self.rows.get_mut(index) {
            *row = text.to_string();
        }
        self.line(&format!("~ {:>3}  {}", index, text));
    }

    fn set_icon(&mut self, icon: &IconData) {
        self.line(&format!("[icon {}x{}]", icon.width, icon.height));
    }

    fn set_icon_text(&mut self, text: &str) {
        self.line(&format!("[{}]", text));
    }

    fn clear_icon(&mut self) {
        self.line("[ ]");
    }

    fn clear_rename_field(&mut self) {}

    fn show_error(&mut self, message: &str) {
        self.line(&format!("error: {}", message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(view: ConsoleView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn test_rows_and_icon() {
        let mut view = ConsoleView::new(Vec::new());

        view.append_rows(vec![RowViewModel {
            title: "Chess.lnk".to_string(),
            icon: IconData::placeholder(1, 1, 0, 0, 0),
        }]);
        view.set_icon(&IconData::placeholder(64, 64, 0, 0, 0));
        view.set_row_text(0, "ChessPro.lnk");
        view.print_list();

        assert_eq!(
            output(view),
            "+   0  Chess.lnk\n[icon 64x64]\n~   0  ChessPro.lnk\n  0  ChessPro.lnk\n"
        );
    }

    #[test]
    fn test_empty_list() {
        let mut view = ConsoleView::new(Vec::new());
        view.print_list();
        assert_eq!(output(view), "(no shortcuts)\n");
    }
}
