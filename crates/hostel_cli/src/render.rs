//! Text rendering for listings.

use hostel_core::{Amount, Describe, FacilitySnapshot, OccupantId};
use std::io::{self, Write};

/// Writes the full "Display All" report.
pub fn write_snapshot(out: &mut impl Write, snapshot: &FacilitySnapshot) -> io::Result<()> {
    writeln!(out, "\n--- Hostel Details ---")?;

    writeln!(out, "\nStudents:")?;
    for occupant in &snapshot.occupants {
        writeln!(out, "{}", occupant.describe())?;
    }

    writeln!(out, "\nStaff:")?;
    for member in &snapshot.staff {
        writeln!(out, "{}", member.describe())?;
    }

    writeln!(out, "\nRooms:")?;
    for room in &snapshot.rooms {
        writeln!(
            out,
            "Room Number: {}, Occupied: {}",
            room.number,
            if room.is_occupied() { "Yes" } else { "No" }
        )?;
        if let Some(id) = room.occupant_id() {
            writeln!(out, "Occupant: {}", occupant_name(snapshot, id))?;
        }
    }
    let free: Vec<String> = snapshot.free_rooms.iter().map(u32::to_string).collect();
    if free.is_empty() {
        writeln!(out, "Free Rooms: (none)")?;
    } else {
        writeln!(out, "Free Rooms: {}", free.join(", "))?;
    }

    writeln!(out, "\nNotices:")?;
    for notice in &snapshot.notices {
        writeln!(out, "{}", notice.describe())?;
    }

    writeln!(out, "\nOpen Maintenance Requests:")?;
    if snapshot.maintenance_requests.is_empty() {
        writeln!(out, "(none)")?;
    }
    for notice in &snapshot.maintenance_requests {
        writeln!(out, "{}", notice.describe())?;
    }

    writeln!(out, "\nVisitors:")?;
    for visitor in &snapshot.visitors {
        writeln!(out, "{}", visitor.describe())?;
    }

    writeln!(out, "\nFees:")?;
    for line in &snapshot.fees {
        writeln!(
            out,
            "Student ID: {}, Amount Due: {}, Total Amount: {}, Paid: {}",
            line.occupant_id,
            money(line.due),
            money(line.charged),
            money(line.paid)
        )?;
    }
    writeln!(
        out,
        "Total Fees: {}, Total Paid: {}",
        money(snapshot.total_charged),
        money(snapshot.total_paid)
    )?;

    writeln!(out, "\nAttendance:")?;
    for line in &snapshot.attendance {
        writeln!(
            out,
            "Student ID: {}, Days Attended: {}, Leave Days: {}",
            line.occupant_id, line.days_attended, line.leave_days
        )?;
    }

    writeln!(out, "\nMeal Times:")?;
    for time in &snapshot.meal_times {
        writeln!(out, "{time}")?;
    }
    Ok(())
}

/// Writes the overdue listing followed by the facility-wide total.
pub fn write_overdue(
    out: &mut impl Write,
    overdue: &[(OccupantId, Amount)],
    total_charged: Amount,
) -> io::Result<()> {
    writeln!(out, "Overdue Fees:")?;
    if overdue.is_empty() {
        writeln!(out, "(none)")?;
    }
    for (id, amount) in overdue {
        writeln!(out, "Student ID: {}, Amount Overdue: {}", id, money(*amount))?;
    }
    writeln!(out, "Total Fees: {}", money(total_charged))
}

/// `$` followed by the amount at two decimal places; negative balances keep
/// their sign in front of the currency symbol.
pub fn money(amount: Amount) -> String {
    let rounded = amount.round_dp(2);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${:.2}", rounded.abs())
    } else {
        format!("${:.2}", rounded.abs())
    }
}

fn occupant_name(snapshot: &FacilitySnapshot, id: OccupantId) -> String {
    snapshot
        .occupants
        .iter()
        .find(|occupant| occupant.id == id)
        .map(|occupant| occupant.name.clone())
        .unwrap_or_else(|| format!("#{id}"))
}
