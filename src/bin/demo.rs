//! Interactive terminal demo for the brainrot captcha widget.
//!
//! Commands:
//!   1..9      toggle the numbered grid cell
//!   v         verify the current selection
//!   r         reload (new challenge, selection cleared)
//!   j         dump the renderer view as JSON
//!   e <url>   print the modal embed snippet for an external page
//!   q         quit
//!
//! Dataset comes from CAPTCHA_DATA_PATH when set, else the built-in seeds.

use std::io::{stdin, stdout, Write};

use crossterm::style::Stylize;
use tracing::info;

use brainrot_captcha::embed::FrameEmbed;
use brainrot_captcha::session::CaptchaSession;
use brainrot_captcha::telemetry;
use brainrot_captcha::view::ChallengeView;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let mut session = CaptchaSession::from_env();
  session.on_success(|token| {
    info!(target: "brainrot_captcha", %token, "demo: success callback fired");
  });

  println!("{}", "brainrot-captcha demo".bold());
  println!("Toggle cells with 1-9, then 'v' to verify. 'r' reloads, 'q' quits.\n");

  loop {
    print_grid(&session.view(), session.hint());

    let mut input = String::new();
    stdin().read_line(&mut input)?;
    let cmd = input.trim();

    match cmd {
      "q" => break,
      "r" => session.reload(),
      "v" => {
        let out = session.verify();
        if out.passed {
          let token = out.token.unwrap_or_default();
          println!("\n{} token: {}\n", "PASSED".green().bold(), token);
        } else {
          println!("\n{} {}\n", "FAILED".red().bold(), out.hint.unwrap_or_default());
        }
      }
      "j" => {
        println!("{}", serde_json::to_string_pretty(&session.view())?);
      }
      s if s.starts_with("e ") => {
        let embed = FrameEmbed::new(s[2..].trim(), "Embedded page");
        match embed.hint() {
          None => println!("{}", embed.to_html()),
          Some(hint) => println!("{}", hint.clone().red()),
        }
      }
      s => match s.parse::<usize>() {
        Ok(n) if (1..=9).contains(&n) => toggle_cell(&mut session, n),
        _ => println!("Commands: 1-9, v, r, j, e <url>, q"),
      },
    }
  }

  Ok(())
}

fn toggle_cell(session: &mut CaptchaSession, n: usize) {
  let view = session.view();
  match view.cells.get(n - 1).and_then(|c| c.asset_id.clone()) {
    Some(id) => session.toggle(&id),
    None => println!("Cell {} is an empty slot.", n),
  }
}

fn print_grid(view: &ChallengeView, hint: Option<&str>) {
  println!("{}", view.prompt.clone().bold());
  println!("challenge: {}", view.challenge_id.clone().dark_grey());

  for (row, cells) in view.cells.chunks(3).enumerate() {
    let mut line = String::new();
    for (col, cell) in cells.iter().enumerate() {
      let n = row * 3 + col + 1;
      let label = match &cell.asset_id {
        Some(_) if cell.selected => format!("[x] {} {:<20}", n, cell.name).green().to_string(),
        Some(_) => format!("( ) {} {:<20}", n, cell.name),
        None => format!("    {} {:<20}", n, "—"),
      };
      line.push_str(&label);
    }
    println!("{}", line);
  }

  if let Some(h) = hint {
    println!("{}", h.to_string().yellow());
  }
  print!("> ");
  let _ = stdout().flush();
}
