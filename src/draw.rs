use std::{
    io::{stderr, stdout, Write},
    time::Duration,
};

use crossterm::{
    cursor::{Hide, RestorePosition, SavePosition, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
        SetTitle,
    },
};

use crate::board::Board;

type Err = Box<dyn std::error::Error>;
type Result<T> = std::result::Result<T, Err>;

static DELAYS: [u64; 14] = [1, 10, 20, 40, 60, 100, 150, 200, 300, 450, 800, 1200, 1500, 2000];

/// Terminal front end. Owns the board and only reads it between
/// completed mutating calls; all the automaton logic stays in
/// [`Board`].
pub struct App {
    board: Board,
    paused: bool,
    delay: usize,
    generation: u64,
}

impl App {
    #[inline]
    pub fn new(board: Board) -> Self {
        App {
            board,
            paused: false,
            delay: 9,
            generation: 0,
        }
    }
}

enum Action {
    Exit,
    Tick,
    Redraw,
}

pub fn run(a: App) -> Result<()> {
    let (tw, th) = terminal::size()?;
    if (tw as usize) < a.board.width() || (th as usize) < a.board.height() + 2 {
        return Err(format!(
            "Terminal size should be better then board size! ({}x{} board, {tw}x{th} terminal)",
            a.board.width(),
            a.board.height(),
        )
        .into());
    }

    runup()?;
    let d = draw(a);
    shutdown()?;
    d
}

fn runup() -> Result<()> {
    execute!(
        stderr(),
        EnterAlternateScreen,
        SetTitle("Conway board"),
        Hide,
        EnableMouseCapture
    )?;
    enable_raw_mode()?;
    clear()?;
    execute!(stdout(), SavePosition)?;
    Ok(())
}

fn shutdown() -> Result<()> {
    execute!(stderr(), DisableMouseCapture, LeaveAlternateScreen, Show)?;
    disable_raw_mode()?;
    Ok(())
}

fn draw(mut a: App) -> Result<()> {
    loop {
        clear()?;
        frame(&a)?;

        match input(&mut a)? {
            Action::Exit => break,
            Action::Redraw => {}
            Action::Tick => {
                if !a.paused {
                    a.board.step();
                    a.generation += 1;
                }
            }
        }
    }
    Ok(())
}

fn frame(a: &App) -> Result<()> {
    for row in a.board.rows() {
        for cell in row {
            if *cell {
                print!("#");
            } else {
                print!(" ");
            }
        }
        print!("\n\r");
    }

    print!(
        "gen {}  {}  {}ms  [p]ause [n]ext [r]eset [j/k]speed [q]uit, click toggles\n\r",
        a.generation,
        if a.paused { "paused " } else { "running" },
        DELAYS[a.delay],
    );
    stdout().flush()?;
    Ok(())
}

/// Waits up to one tick delay for input. A timeout advances the
/// generation, a handled event forces an immediate redraw instead.
fn input(a: &mut App) -> Result<Action> {
    if !event::poll(Duration::from_millis(DELAYS[a.delay]))? {
        return Ok(Action::Tick);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                if let KeyCode::Char('c') = key.code {
                    return Ok(Action::Exit);
                }
            } else {
                match key.code {
                    KeyCode::Char('q') => return Ok(Action::Exit),
                    KeyCode::Char('p') | KeyCode::Char(' ') => a.paused = !a.paused,
                    KeyCode::Char('n') if a.paused => {
                        a.board.step();
                        a.generation += 1;
                    }
                    KeyCode::Char('r') => {
                        a.board.reset();
                        a.generation = 0;
                    }
                    KeyCode::Char('j') => a.delay = (a.delay + 1).min(DELAYS.len() - 1),
                    KeyCode::Char('k') => a.delay = a.delay.saturating_sub(1),
                    _ => {}
                }
            }
        }
        Event::Mouse(m) => {
            if let MouseEventKind::Down(MouseButton::Left) = m.kind {
                let (x, y) = (m.column as usize, m.row as usize);
                if x < a.board.width() && y < a.board.height() {
                    a.board.toggle(x, y);
                }
            }
        }
        _ => {}
    }
    Ok(Action::Redraw)
}

fn clear() -> Result<()> {
    use terminal::{Clear, ClearType};

    execute!(stdout(), Clear(ClearType::Purge))?;
    execute!(stdout(), RestorePosition)?;
    Ok(())
}
