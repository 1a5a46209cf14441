use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};

use snake_arcade::{Cell, Direction, Grid, InputSnapshot, Key, Scene};

type TermInt = u16;

const SNAKE_BODY_CHAR: char = '█';
const FOOD_CHAR: char = 'O';
const HINT: &str = "Arrow keys or WASD to move, Enter to select, Esc to quit";

/// Keys seen during one frame.
#[derive(Default)]
pub struct Polled {
    pub input: InputSnapshot,
    pub interrupted: bool,
}

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    // What is currently on screen, row-major. Only differing cells get printed.
    screen: Vec<char>,
}

impl TermManager {
    pub fn new() -> crossterm::Result<Self> {
        let (width, height) = terminal::size()?;
        let stdout = stdout();
        let screen = vec![' '; width as usize * height as usize];
        Ok(TermManager { width, height, stdout, screen })
    }

    pub fn fits(&self, grid: &Grid) -> bool {
        let (w, h) = required_size(grid);
        self.width as u32 >= w && self.height as u32 >= h
    }

    pub fn get_terminal_size(&self) -> (TermInt, TermInt) {
        (self.width, self.height)
    }

    pub fn setup(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        self.clear()
    }

    pub fn restore(&mut self) -> crossterm::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
    }

    /// Drains pending events without blocking.
    pub fn read_input(&mut self) -> crossterm::Result<Polled> {
        let mut polled = Polled::default();

        while poll(Duration::from_millis(1))? {
            match read()? {
                Event::Key(ev) if is_ctrl_c(&ev) => polled.interrupted = true,
                Event::Key(KeyEvent { code, modifiers: _ }) => {
                    if let Some(key) = map_key(code) {
                        polled.input.press(key);
                    }
                }
                Event::Resize(w, h) => self.resize(w, h)?,
                _ => {}
            }
        }

        Ok(polled)
    }

    pub fn draw(&mut self, scene: &Scene, grid: &Grid) -> crossterm::Result<()> {
        let mut frame = Frame::new(self.width, self.height);

        match scene {
            Scene::Playing { snake, heading, food, score } => {
                frame.borders(grid);
                frame.put_cell(*food, FOOD_CHAR);
                for (i, pos) in snake.iter().enumerate() {
                    let ch = if i == 0 { head_char(*heading) } else { SNAKE_BODY_CHAR };
                    frame.put_cell(*pos, ch);
                }
                frame.text(0, grid.height() as TermInt + 2, &format!("Score: {}", score));
            }
            Scene::Menu { title, score, options, selected } => {
                let mut y = self.height / 3;
                frame.centered(y, title);
                y += 2;

                if let Some(score) = score {
                    frame.centered(y, &format!("Final Score: {}", score));
                    y += 2;
                }

                for (i, label) in options.iter().enumerate() {
                    let line = if i == *selected { format!("> {} <", label) } else { label.to_string() };
                    frame.centered(y, &line);
                    y += 2;
                }

                frame.centered(self.height.saturating_sub(2), HINT);
            }
        }

        self.present(&frame)
    }

    pub fn clear(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        self.screen = vec![' '; self.width as usize * self.height as usize];
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn present(&mut self, frame: &Frame) -> crossterm::Result<()> {
        for (i, (&ch, shown)) in frame.chars.iter().zip(self.screen.iter_mut()).enumerate() {
            if ch != *shown {
                let x = (i % self.width as usize) as TermInt;
                let y = (i / self.width as usize) as TermInt;
                queue!(self.stdout, cursor::MoveTo(x, y), style::Print(ch))?;
                *shown = ch;
            }
        }

        self.stdout.flush()?;
        Ok(())
    }

    fn resize(&mut self, width: TermInt, height: TermInt) -> crossterm::Result<()> {
        self.width = width;
        self.height = height;
        self.clear()
    }
}

/// One full screen of characters, composed before anything is printed.
struct Frame {
    width: TermInt,
    height: TermInt,
    chars: Vec<char>,
}

impl Frame {
    fn new(width: TermInt, height: TermInt) -> Self {
        Frame { width, height, chars: vec![' '; width as usize * height as usize] }
    }

    fn put(&mut self, x: TermInt, y: TermInt, ch: char) {
        if x < self.width && y < self.height {
            self.chars[self.width as usize * y as usize + x as usize] = ch;
        }
    }

    // Grid cells sit inside the border, one character each.
    fn put_cell(&mut self, cell: Cell, ch: char) {
        if cell.x >= 0 && cell.y >= 0 {
            self.put(cell.x as TermInt + 1, cell.y as TermInt + 1, ch);
        }
    }

    fn text(&mut self, x: TermInt, y: TermInt, line: &str) {
        for (i, ch) in line.chars().enumerate() {
            self.put(x.saturating_add(i as TermInt), y, ch);
        }
    }

    fn centered(&mut self, y: TermInt, line: &str) {
        let len = line.chars().count() as TermInt;
        self.text(self.width.saturating_sub(len) / 2, y, line);
    }

    fn borders(&mut self, grid: &Grid) {
        let end_x = grid.width() as TermInt + 1;
        let end_y = grid.height() as TermInt + 1;

        for x in 0..=end_x {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            self.put(x, 0, ch);
            self.put(x, end_y, ch);
        }

        for y in 1..end_y {
            self.put(0, y, '|');
            self.put(end_x, y, '|');
        }
    }
}

/// Room for the grid, its border and the score line.
pub fn required_size(grid: &Grid) -> (u32, u32) {
    (grid.width() as u32 + 2, grid.height() as u32 + 3)
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char('w') | KeyCode::Up => Some(Key::Up),
        KeyCode::Char('a') | KeyCode::Left => Some(Key::Left),
        KeyCode::Char('s') | KeyCode::Down => Some(Key::Down),
        KeyCode::Char('d') | KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

fn head_char(direction: Direction) -> char {
    match direction {
        Direction::Up => '^',
        Direction::Down => 'v',
        Direction::Left => '<',
        Direction::Right => '>',
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
