// src/io/render.rs

use std::io::{self, Write};

use crate::model::queue::PieceQueue;

/// Writes the queue state front-to-back, one bracketed piece per slot, or an
/// explicit empty message. Shown before every prompt.
pub fn render_queue<W: Write>(out: &mut W, queue: &PieceQueue) -> io::Result<()> {
    writeln!(out, "\n--- Current queue state ---")?;
    if queue.is_empty() {
        writeln!(out, "The piece queue is empty!")?;
    } else {
        let pieces: Vec<String> = queue.iter().map(|piece| piece.to_string()).collect();
        writeln!(out, "Piece queue: {}", pieces.join(" "))?;
    }
    writeln!(out, "---------------------------")
}

/// Writes the action menu and the prompt. The prompt line is left open, so
/// callers flush before reading.
pub fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nActions:")?;
    writeln!(out, " Code | Action")?;
    writeln!(out, "------|---------------------------")?;
    writeln!(out, "  1   | Play piece (dequeue)")?;
    writeln!(out, "  2   | Insert new piece (enqueue)")?;
    writeln!(out, "  0   | Quit")?;
    write!(out, "Choose an option: ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::generator::PieceGenerator;

    #[test]
    fn empty_queue_renders_explicit_message() {
        let queue = PieceQueue::new();
        let mut out = Vec::new();
        render_queue(&mut out, &queue).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("The piece queue is empty!"));
    }

    #[test]
    fn full_queue_renders_all_pieces_front_to_back() {
        let mut generator = PieceGenerator::seeded(4);
        let queue = PieceQueue::prefilled(&mut generator);
        let mut out = Vec::new();
        render_queue(&mut out, &queue).unwrap();
        let text = String::from_utf8(out).unwrap();
        for id in 0..5 {
            assert!(text.contains(&format!(" {id}]")), "missing id {id}: {text}");
        }
    }

    #[test]
    fn menu_lists_all_three_options() {
        let mut out = Vec::new();
        render_menu(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Play piece"));
        assert!(text.contains("Insert new piece"));
        assert!(text.contains("Quit"));
        assert!(text.ends_with("Choose an option: "));
    }
}
