// src/simulation/session.rs

use std::io::{self, BufRead, Write};

use log::{debug, info, warn};
use rand::Rng;

use crate::io::render;
use crate::model::generator::PieceGenerator;
use crate::model::queue::{PieceQueue, QueueError};

/// The interactive session: owns the piece queue and the generator, and runs
/// the prompt/read/dispatch loop over arbitrary input and output handles.
///
/// Generic over `BufRead`/`Write` so the whole loop can be exercised in
/// tests with in-memory buffers instead of a terminal.
pub struct Session<R: Rng, In: BufRead, Out: Write> {
    queue: PieceQueue,
    generator: PieceGenerator<R>,
    input: In,
    output: Out,
}

impl<R: Rng, In: BufRead, Out: Write> Session<R, In, Out> {
    /// Builds a session with the queue pre-filled to capacity, so the first
    /// prompt already shows ids 0..4 front-to-back.
    pub fn new(mut generator: PieceGenerator<R>, input: In, output: Out) -> Self {
        let queue = PieceQueue::prefilled(&mut generator);
        info!("session started with {} queued pieces", queue.len());
        Self {
            queue,
            generator,
            input,
            output,
        }
    }

    /// Runs the menu loop until the user quits (option 0) or input ends.
    ///
    /// Every iteration renders the queue and the menu, then reads one line.
    /// Reading whole lines keeps malformed input harmless: the bad bytes are
    /// consumed through the newline and the loop simply re-prompts.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "--- Tetris Stack: upcoming piece queue simulator ---"
        )?;

        loop {
            render::render_queue(&mut self.output, &self.queue)?;
            render::render_menu(&mut self.output)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                // End of input behaves like a quit request.
                info!("input closed, ending session");
                writeln!(self.output)?;
                break;
            }

            let choice: i32 = match line.trim().parse() {
                Ok(n) => n,
                Err(_) => {
                    warn!("non-numeric menu input: {:?}", line.trim());
                    writeln!(self.output, "\nInvalid option. Please enter a number.")?;
                    continue;
                }
            };

            match choice {
                1 => self.play_piece()?,
                2 => self.insert_piece()?,
                0 => {
                    writeln!(
                        self.output,
                        "\nLeaving the simulator. Thanks for playing Tetris Stack!"
                    )?;
                    break;
                }
                _ => {
                    writeln!(self.output, "\nInvalid option. Please choose 0, 1 or 2.")?;
                }
            }
        }

        Ok(())
    }

    /// Option 1: remove the piece at the front of the queue.
    fn play_piece(&mut self) -> io::Result<()> {
        match self.queue.dequeue() {
            Ok(piece) => {
                debug!("played {piece}, {} pieces left", self.queue.len());
                writeln!(
                    self.output,
                    "\nSUCCESS: played piece (removed from the front): {piece}"
                )
            }
            Err(error @ QueueError::Empty) => {
                writeln!(self.output, "\nERROR: {error}! There is no piece to play.")
            }
            Err(error) => writeln!(self.output, "\nERROR: {error}."),
        }
    }

    /// Option 2: generate a piece and insert it at the back. Generation
    /// happens before the capacity check, so a rejected insert still
    /// consumes an id.
    fn insert_piece(&mut self) -> io::Result<()> {
        let piece = self.generator.next_piece();
        match self.queue.enqueue(piece) {
            Ok(()) => {
                debug!("inserted {piece}, {} pieces queued", self.queue.len());
                writeln!(
                    self.output,
                    "\nSUCCESS: piece {piece} inserted at the back of the queue."
                )
            }
            Err(error @ QueueError::Full) => {
                writeln!(
                    self.output,
                    "\nERROR: {error}! Cannot insert a new piece."
                )
            }
            Err(error) => writeln!(self.output, "\nERROR: {error}."),
        }
    }
}
