//! Menu choices and their numeric codes.

/// One entry of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AllocateRoom,
    DeallocateRoom,
    AddNotice,
    AddVisitor,
    AddFee,
    PayFee,
    MarkAttendance,
    RegisterStudent,
    RegisterStaff,
    AddMealTime,
    DisplayAll,
    RequestLeave,
    OverdueFees,
    Exit,
}

/// Menu entries in display order. `Exit` is listed last with code 0.
pub const MENU: &[MenuChoice] = &[
    MenuChoice::AllocateRoom,
    MenuChoice::DeallocateRoom,
    MenuChoice::AddNotice,
    MenuChoice::AddVisitor,
    MenuChoice::AddFee,
    MenuChoice::PayFee,
    MenuChoice::MarkAttendance,
    MenuChoice::RegisterStudent,
    MenuChoice::RegisterStaff,
    MenuChoice::AddMealTime,
    MenuChoice::DisplayAll,
    MenuChoice::RequestLeave,
    MenuChoice::OverdueFees,
    MenuChoice::Exit,
];

impl MenuChoice {
    pub fn code(self) -> u8 {
        match self {
            Self::AllocateRoom => 1,
            Self::DeallocateRoom => 2,
            Self::AddNotice => 3,
            Self::AddVisitor => 4,
            Self::AddFee => 5,
            Self::PayFee => 6,
            Self::MarkAttendance => 7,
            Self::RegisterStudent => 8,
            Self::RegisterStaff => 9,
            Self::AddMealTime => 10,
            Self::DisplayAll => 11,
            Self::RequestLeave => 12,
            Self::OverdueFees => 13,
            Self::Exit => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AllocateRoom => "Allocate Room",
            Self::DeallocateRoom => "Deallocate Room",
            Self::AddNotice => "Add Notice",
            Self::AddVisitor => "Add Visitor",
            Self::AddFee => "Add Fee",
            Self::PayFee => "Pay Fee",
            Self::MarkAttendance => "Mark Attendance",
            Self::RegisterStudent => "Register Student",
            Self::RegisterStaff => "Register Staff",
            Self::AddMealTime => "Add Meal Time",
            Self::DisplayAll => "Display All",
            Self::RequestLeave => "Request Leave",
            Self::OverdueFees => "Overdue Fees",
            Self::Exit => "Exit",
        }
    }

    /// Parses a typed menu selection; `None` for anything unrecognized.
    pub fn parse(input: &str) -> Option<Self> {
        let code = input.trim().parse::<u8>().ok()?;
        MENU.iter().copied().find(|choice| choice.code() == code)
    }
}
