//! Interactive menu session.
//!
//! # Responsibility
//! - Prompt for a menu choice, then for each field of that choice, one line
//!   per field.
//! - Translate field input into facility calls and report the outcome.
//!
//! # Invariants
//! - Bad input (unknown choice, malformed field, rejected operation) prints
//!   an error and returns to the menu; it never ends the session.
//! - End of input ends the session cleanly, same as choosing Exit.
//! - Only I/O failures on the terminal streams are returned to the caller.

use crate::menu::{MenuChoice, MENU};
use crate::render::{money, write_overdue, write_snapshot};
use hostel_core::{Amount, Facility, FacilityError, OccupantId, RoomNumber, StaffId};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};
use std::num::NonZeroU32;
use std::str::FromStr;

/// Malformed field input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty { field: &'static str },
    NotANumber { field: &'static str, value: String },
    NotAnAmount { field: &'static str, value: String },
    NotAFlag { field: &'static str, value: String },
    ZeroDays,
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::NotANumber { field, value } => {
                write!(f, "{field} must be a non-negative whole number, got `{value}`")
            }
            Self::NotAnAmount { field, value } => {
                write!(f, "{field} must be a decimal amount, got `{value}`")
            }
            Self::NotAFlag { field, value } => {
                write!(f, "{field} must be 1 (yes) or 0 (no), got `{value}`")
            }
            Self::ZeroDays => write!(f, "leave days must be at least 1"),
        }
    }
}

impl Error for InputError {}

#[derive(Debug)]
enum StepError {
    EndOfInput,
    Io(io::Error),
    Input(InputError),
    Rejected(FacilityError),
}

impl From<io::Error> for StepError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<InputError> for StepError {
    fn from(value: InputError) -> Self {
        Self::Input(value)
    }
}

impl From<FacilityError> for StepError {
    fn from(value: FacilityError) -> Self {
        Self::Rejected(value)
    }
}

type StepResult<T> = Result<T, StepError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu loop over arbitrary line input and text output.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs until Exit or end of input.
    pub fn run(&mut self, facility: &mut Facility) -> io::Result<()> {
        loop {
            self.write_menu()?;
            let flow = match self.step(facility) {
                Ok(flow) => flow,
                Err(StepError::EndOfInput) => Flow::Exit,
                Err(StepError::Io(err)) => return Err(err),
                Err(StepError::Input(err)) => {
                    writeln!(self.output, "Error: {err}")?;
                    Flow::Continue
                }
                Err(StepError::Rejected(err)) => {
                    writeln!(self.output, "Error: {err}")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                debug!("event=session_end module=cli status=ok");
                return Ok(());
            }
        }
    }

    fn write_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nHostel Management System")?;
        for choice in MENU {
            writeln!(self.output, "{}. {}", choice.code(), choice.label())?;
        }
        Ok(())
    }

    fn step(&mut self, facility: &mut Facility) -> StepResult<Flow> {
        let raw = self.prompt("Enter your choice")?;
        let Some(choice) = MenuChoice::parse(&raw) else {
            writeln!(self.output, "Invalid choice. Please try again.")?;
            return Ok(Flow::Continue);
        };
        debug!("event=menu_choice module=cli status=ok code={}", choice.code());

        match choice {
            MenuChoice::AllocateRoom => {
                let occupant_id: OccupantId = self.prompt_number("Student ID")?;
                let room: RoomNumber = self.prompt_number("Room number")?;
                facility.allocate_room(occupant_id, room)?;
                writeln!(self.output, "Room {room} is allocated to student {occupant_id}.")?;
            }
            MenuChoice::DeallocateRoom => {
                let room: RoomNumber = self.prompt_number("Room number")?;
                let occupant_id = facility.deallocate_room(room)?;
                writeln!(
                    self.output,
                    "Room {room} is deallocated (was held by student {occupant_id})."
                )?;
            }
            MenuChoice::AddNotice => {
                let message = self.prompt_text("Notice message")?;
                let sender = self.prompt_text("Sender")?;
                let recipient = self.prompt_text("Recipient")?;
                let maintenance = self.prompt_flag("Maintenance request? (1 = yes, 0 = no)")?;
                facility.post_notice(message, sender, recipient, maintenance);
                writeln!(self.output, "Notice posted.")?;
            }
            MenuChoice::AddVisitor => {
                let name = self.prompt_text("Visitor name")?;
                let contact = self.prompt_text("Visitor contact")?;
                let reason = self.prompt_text("Reason for visit")?;
                let occupant_id: OccupantId = self.prompt_number("Student ID being visited")?;
                facility.log_visitor(name, contact, reason, occupant_id);
                writeln!(self.output, "Visitor logged.")?;
            }
            MenuChoice::AddFee => {
                let occupant_id: OccupantId = self.prompt_number("Student ID")?;
                let amount = self.prompt_amount("Fee amount to add")?;
                facility.add_fee(occupant_id, amount)?;
                let due = facility.amount_due(occupant_id)?;
                writeln!(
                    self.output,
                    "Fee added. Amount due for student {occupant_id}: {}",
                    money(due)
                )?;
            }
            MenuChoice::PayFee => {
                let occupant_id: OccupantId = self.prompt_number("Student ID")?;
                let amount = self.prompt_amount("Fee amount to pay")?;
                facility.pay_fee(occupant_id, amount)?;
                let due = facility.amount_due(occupant_id)?;
                writeln!(
                    self.output,
                    "Payment recorded. Amount due for student {occupant_id}: {}",
                    money(due)
                )?;
            }
            MenuChoice::MarkAttendance => {
                let occupant_id: OccupantId = self.prompt_number("Student ID")?;
                let days = facility.mark_attendance(occupant_id);
                writeln!(
                    self.output,
                    "Attendance marked. Student {occupant_id} has attended {days} day(s)."
                )?;
            }
            MenuChoice::RegisterStudent => {
                let name = self.prompt_text("Student name")?;
                let contact = self.prompt_text("Contact")?;
                let id: OccupantId = self.prompt_number("Student ID")?;
                facility.register_occupant(id, name, contact)?;
                writeln!(self.output, "Student registered successfully.")?;
            }
            MenuChoice::RegisterStaff => {
                let name = self.prompt_text("Staff name")?;
                let contact = self.prompt_text("Contact")?;
                let id: StaffId = self.prompt_number("Staff ID")?;
                let role = self.prompt_text("Role")?;
                facility.register_staff(id, name, contact, role)?;
                writeln!(self.output, "Staff registered successfully.")?;
            }
            MenuChoice::AddMealTime => {
                let time = self.prompt_text("Meal time")?;
                facility.add_meal_time(time);
                writeln!(self.output, "Meal time added.")?;
            }
            MenuChoice::DisplayAll => {
                write_snapshot(&mut self.output, &facility.snapshot())?;
            }
            MenuChoice::RequestLeave => {
                let occupant_id: OccupantId = self.prompt_number("Student ID")?;
                let days: u32 = self.prompt_number("Leave days")?;
                let days = NonZeroU32::new(days).ok_or(InputError::ZeroDays)?;
                let total = facility.request_leave(occupant_id, days);
                writeln!(
                    self.output,
                    "Leave recorded. Student {occupant_id} has {total} leave day(s)."
                )?;
            }
            MenuChoice::OverdueFees => {
                write_overdue(
                    &mut self.output,
                    &facility.overdue_fees(),
                    facility.total_fees(),
                )?;
            }
            MenuChoice::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    /// Prints `label: ` and reads one line without its line ending.
    fn prompt(&mut self, label: &str) -> StepResult<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(StepError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn prompt_text(&mut self, field: &'static str) -> StepResult<String> {
        let value = self.prompt(field)?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(InputError::Empty { field }.into());
        }
        Ok(trimmed.to_string())
    }

    fn prompt_number<T: FromStr>(&mut self, field: &'static str) -> StepResult<T> {
        let value = self.prompt_text(field)?;
        value
            .parse::<T>()
            .map_err(|_| InputError::NotANumber { field, value }.into())
    }

    fn prompt_amount(&mut self, field: &'static str) -> StepResult<Amount> {
        let value = self.prompt_text(field)?;
        Amount::from_str(&value).map_err(|_| InputError::NotAnAmount { field, value }.into())
    }

    fn prompt_flag(&mut self, field: &'static str) -> StepResult<bool> {
        let value = self.prompt_text(field)?;
        match value.as_str() {
            "1" | "y" | "yes" => Ok(true),
            "0" | "n" | "no" => Ok(false),
            _ => Err(InputError::NotAFlag { field, value }.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use hostel_core::{Amount, Facility, HostelConfig};
    use std::io::Cursor;
    use std::num::NonZeroU32;

    fn run_script(facility: &mut Facility, script: &str) -> String {
        let mut session = Session::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        session.run(facility).expect("in-memory session");
        String::from_utf8(session.output).expect("utf-8 output")
    }

    fn seeded() -> Facility {
        Facility::from_config(&HostelConfig::default()).expect("seeded facility")
    }

    #[test]
    fn allocates_and_reports_conflicts() {
        let mut facility = seeded();
        let output = run_script(&mut facility, "1\n1\n3\n1\n2\n3\n1\n1\n4\n0\n");

        assert!(output.contains("Room 3 is allocated to student 1."));
        assert!(output.contains("Error: room 3 is already occupied by occupant 1"));
        assert!(output.contains("Error: occupant 1 already holds room 3"));
        assert_eq!(facility.find_occupant(1).and_then(|o| o.room()), Some(3));
        assert_eq!(facility.find_occupant(2).and_then(|o| o.room()), None);
    }

    #[test]
    fn fee_flow_reports_running_balance() {
        let mut facility = seeded();
        let output = run_script(
            &mut facility,
            "5\n1\n500\n5\n1\n200\n6\n1\n300\n13\n6\n2\n10\n0\n",
        );

        assert!(output.contains("Amount due for student 1: $700.00"));
        assert!(output.contains("Payment recorded. Amount due for student 1: $400.00"));
        assert!(output.contains("Student ID: 1, Amount Overdue: $400.00"));
        assert!(output.contains("Error: unknown occupant id: 2"));
        assert_eq!(facility.amount_due(1), Ok(Amount::from(400)));
    }

    #[test]
    fn malformed_input_reprompts_instead_of_exiting() {
        let mut facility = Facility::new(NonZeroU32::new(2).expect("non-zero"));
        let output = run_script(
            &mut facility,
            "99\nabc\n5\nx\n5\n1\nlots\n2\n7\n12\n1\n0\n0\n",
        );

        assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
        assert!(output.contains("Error: Student ID must be a non-negative whole number, got `x`"));
        assert!(output.contains("Error: Fee amount to add must be a decimal amount, got `lots`"));
        assert!(output.contains("Error: room 7 does not exist"));
        assert!(output.contains("Error: leave days must be at least 1"));
        assert!(facility.fee_record(1).is_none());
    }

    #[test]
    fn end_of_input_mid_command_ends_session() {
        let mut facility = seeded();
        let output = run_script(&mut facility, "1\n2\n");
        assert!(output.ends_with("Room number: "));
        assert_eq!(facility.find_occupant(2).and_then(|o| o.room()), None);
    }

    #[test]
    fn registrations_notices_and_display_all() {
        let mut facility = Facility::new(NonZeroU32::new(2).expect("non-zero"));
        let script = concat!(
            "8\nSara Khan\n555-0101\n7\n",
            "8\nDup\n1\n7\n",
            "9\nMr. Ahsan\n1122334455\n1\nWarden\n",
            "3\nLeaking tap in 2\nSara Khan\nWarden\n1\n",
            "4\nOmar\n555-0199\nFamily\n7\n",
            "7\n7\n",
            "12\n7\n2\n",
            "10\n08:00 Breakfast\n",
            "1\n7\n2\n",
            "11\n",
            "0\n",
        );
        let output = run_script(&mut facility, script);

        assert!(output.contains("Error: occupant id already registered: 7"));
        assert!(output.contains("Student Name: Sara Khan, Contact: 555-0101, ID: 7, Room Number: 2"));
        assert!(output.contains("Staff Name: Mr. Ahsan, Contact: 1122334455, ID: 1, Role: Warden"));
        assert!(output.contains("Room Number: 2, Occupied: Yes\nOccupant: Sara Khan"));
        assert!(output.contains("Notice: Leaking tap in 2, From: Sara Khan, To: Warden (Maintenance Request)"));
        assert!(output.contains("Visitor Name: Omar, Contact: 555-0199, Reason: Family, Visiting Student ID: 7"));
        assert!(output.contains("Student ID: 7, Days Attended: 1, Leave Days: 2"));
        assert!(output.contains("08:00 Breakfast"));
        assert!(output.contains("Free Rooms: 1\n"));
        assert!(output.contains(
            "Open Maintenance Requests:\nNotice: Leaking tap in 2, From: Sara Khan, To: Warden (Maintenance Request)"
        ));
    }

    #[test]
    fn fees_at_the_decimal_limit_are_reported_not_fatal() {
        let mut facility = seeded();
        let max = Amount::MAX.to_string();
        let script = format!("5\n1\n{max}\n5\n1\n1\n5\n2\n{max}\n11\n13\n0\n");
        let output = run_script(&mut facility, &script);

        assert!(output.contains("Error: amount 1 would overflow the ledger total"));
        assert!(output.contains(&format!("Error: amount {max} would overflow the ledger total")));
        assert!(output.contains("Total Fees: $79228162514264337593543950335.00"));
        assert!(output.contains("Student ID: 1, Amount Overdue: $79228162514264337593543950335.00"));
        assert_eq!(facility.amount_due(1), Ok(Amount::MAX));
        assert!(facility.fee_record(2).is_none());
    }
}
