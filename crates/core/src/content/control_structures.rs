pub const TITLE: &str = "Control Structures in VB.NET";

pub static BEST_PRACTICES: &[&str] = &[
    "Always use proper indentation for better readability",
    "Include End If, Next, or End Select statements properly",
    "Use meaningful variable names and conditions",
    "Consider using Select Case when you have multiple conditions",
    "Initialize variables before using them in conditions",
];
