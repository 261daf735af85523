mod app;
mod config;
mod event;
mod quiz;
mod sim;
mod transcript;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use app::App;
use event::{AppEvent, EventHandler};
use quiz::question::DIFFICULTIES;
use ui::command_input::InputResult;
use ui::components::difficulty_bar::DifficultyBar;
use ui::components::question_panel::QuestionPanel;
use ui::components::transcript_view::TranscriptView;

#[derive(Parser)]
#[command(name = "shellquiz", version, about = "Terminal trivia quiz for learning shell commands")]
struct Cli {
    #[arg(short, long, help = "Path to a questions JSON file")]
    questions: Option<PathBuf>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Initial difficulty (all, easy, medium, hard)")]
    difficulty: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app = App::new(cli.questions.as_deref());

    if let Some(theme_name) = cli.theme {
        if let Some(theme) = ui::theme::Theme::load(&theme_name) {
            let theme: &'static ui::theme::Theme = Box::leak(Box::new(theme));
            app.theme = theme;
        }
    }
    if let Some(difficulty) = cli.difficulty {
        if DIFFICULTIES.contains(&difficulty.as_str()) && app.session.total_questions() > 0 {
            app.set_difficulty(&difficulty);
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(event::tick_rate(app.config.response_delay_ms));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick => app.tick(),
            AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Only Press events; Repeat would double-insert characters
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Alt+digit mirrors the F-keys so the toggles work on terminals that
    // swallow function keys
    if key.modifiers.contains(KeyModifiers::ALT) {
        if let KeyCode::Char(ch @ '1'..='4') = key.code {
            let tag = DIFFICULTIES[(ch as u8 - b'1') as usize].to_string();
            app.set_difficulty(&tag);
        }
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.should_quit = true,
            KeyCode::Char('n') => app.next_question(),
            KeyCode::Char('r') => app.reveal(),
            KeyCode::Char('l') => app.clear_transcript(),
            // Line-editing ctrl chords fall through to the input
            _ => {
                let _ = app.input.handle(key);
            }
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::F(n @ 1..=4) => {
            let tag = DIFFICULTIES[(n - 1) as usize].to_string();
            app.set_difficulty(&tag);
        }
        KeyCode::Up => app.recall_last_command(),
        _ => {
            if app.input.handle(key) == InputResult::Submit {
                app.submit();
            }
        }
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    // Header
    let header_info = format!(
        " {} | {}/{} questions",
        app.session.difficulty(),
        app.session.working_len(),
        app.session.total_questions(),
    );
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " shellquiz ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            &*header_info,
            Style::default()
                .fg(colors.text_dim())
                .bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout[0]);

    frame.render_widget(
        DifficultyBar::new(app.session.difficulty(), app.theme),
        layout[1],
    );

    frame.render_widget(
        QuestionPanel::new(
            app.session.current_question(),
            app.feedback.as_ref(),
            app.theme,
        ),
        layout[2],
    );

    render_input(frame, app, layout[3]);

    frame.render_widget(TranscriptView::new(&app.transcript, app.theme), layout[4]);

    let footer = Paragraph::new(Line::from(Span::styled(
        " [Enter] Check  [Ctrl-N] Next  [Ctrl-R] Reveal  [Ctrl-L] Clear  [Up] Recall  [Esc] Quit ",
        Style::default().fg(colors.text_dim()),
    )));
    frame.render_widget(footer, layout[5]);
}

fn render_input(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let colors = &app.theme.colors;

    let block = Block::bordered()
        .title(" Answer ")
        .border_style(Style::default().fg(colors.border_focused()))
        .style(Style::default().bg(colors.bg()));

    let (before, at, after) = app.input.render_parts();
    let cursor_style = Style::default().fg(colors.cursor_fg()).bg(colors.cursor_bg());

    let mut spans = vec![
        Span::styled("$ ", Style::default().fg(colors.prompt())),
        Span::styled(before.to_string(), Style::default().fg(colors.fg())),
    ];
    match at {
        Some(ch) => {
            spans.push(Span::styled(ch.to_string(), cursor_style));
            spans.push(Span::styled(
                after.to_string(),
                Style::default().fg(colors.fg()),
            ));
        }
        None => spans.push(Span::styled(" ", cursor_style)),
    }

    let input = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(input, area);
}
