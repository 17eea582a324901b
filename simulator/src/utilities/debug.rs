use std::io::{stdout, Stdout, Write};

use crossbeam_channel::Receiver;
use crossterm::{cursor, terminal, ExecutableCommand, Result};

use super::tick_report::TickReport;

pub struct Debug {
    stdout: Stdout,
    lines_printed: u16,
}

impl Debug {
    pub fn new() -> Self {
        Debug {
            stdout: stdout(),
            lines_printed: 0,
        }
    }

    pub fn printstatus(&mut self, report: &TickReport) -> Result<()> {
        let mut frame = Vec::new();
        render(&mut frame, report)?;

        if self.lines_printed > 0 {
            self.stdout.execute(cursor::MoveUp(self.lines_printed))?;
        }
        self.stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        self.stdout.write_all(&frame)?;
        self.stdout.flush()?;

        self.lines_printed = frame.iter().filter(|&&b| b == b'\n').count() as u16;
        Ok(())
    }
}

pub fn main(report_rx: Receiver<TickReport>) -> Result<()> {
    let mut debug = Debug::new();
    for report in report_rx {
        debug.printstatus(&report)?;
    }
    Ok(())
}

fn render<W: Write>(out: &mut W, report: &TickReport) -> Result<()> {
    let moves: Vec<String> = report.moves.iter().map(|mv| mv.to_string()).collect();

    writeln!(out, "+-------------------------+")?;
    writeln!(out, "| {0:<10} | {1:<10} |", "TICK", report.tick)?;
    writeln!(out, "+------------+------------+")?;
    writeln!(out, "| {0:<10} | {1:<10} |", "MOVES", moves.join(" "))?;
    writeln!(out, "+------------+------------+")?;
    writeln!(out, "| {0:<10} | {1:<10} |", "BOARDED", report.boarded)?;
    writeln!(out, "+------------+------------+")?;
    writeln!(out, "| {0:<10} | {1:<10} |", "WAITING", report.waiting())?;
    writeln!(out, "+------------+------------+")?;
    writeln!(out, "| {0:<10} | {1:<10} |", "DELIVERED", report.delivered)?;
    writeln!(out, "+------------+------------+\n")?;

    writeln!(out, "+-------------------------+")?;
    writeln!(out, "| FLOORS                  |")?;
    writeln!(out, "+------------+------------+")?;
    writeln!(out, "| {0:<10} | {1:<10} |", "FLOOR", "WAITING")?;
    for (i, floor) in report.floors.iter().enumerate().rev() {
        writeln!(out, "+------------+------------+")?;
        writeln!(out, "| {0:<10} | {1:<10} |", i, floor.people_waiting)?;
    }
    writeln!(out, "+------------+------------+\n")?;

    writeln!(out, "+--------------------------------------+")?;
    writeln!(out, "| ELEVATORS                            |")?;
    writeln!(out, "+------------+------------+------------+")?;
    writeln!(out, "| {0:<10} | {1:<10} | {2:<10} |", "ELEVATOR", "FLOOR", "LOAD")?;
    for (i, elevator) in report.elevators.iter().enumerate() {
        let mut load = format!("{}/{}", elevator.occupants, elevator.capacity);
        if elevator.is_full() {
            load.push_str(" FULL");
        }
        writeln!(out, "+------------+------------+------------+")?;
        writeln!(out, "| {0:<10} | {1:<10} | {2:<10} |", i, elevator.floor, load)?;
    }
    writeln!(out, "+------------+------------+------------+")?;
    Ok(())
}
