//! Functions & Procedures: four learn tabs plus a practice prompt and code
//! template for each tab's rule set.

use crate::evaluator::RuleSet;
use crate::model::{LessonSection, TopicTab};

pub const TITLE: &str = "Functions and Procedures in VB.NET";

/// Practice guidance shown above the editor for one rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeTemplate {
    pub rule_set: RuleSet,
    pub prompt: &'static str,
    /// Starter code shown as the editor placeholder.
    pub template: &'static str,
}

pub static TABS: &[TopicTab] = &[
    TopicTab {
        key: "basics",
        label: "Basics",
        heading: "Basic Concepts",
        sections: &[
            LessonSection::new(
                "Basic Concepts",
                "In VB.NET, there are two main types of methods:",
            )
            .with_list(&[
                "Functions - Return a value",
                "Procedures (Sub) - Perform actions without returning values",
            ])
            .with_code(
                r#"' Basic Function with error handling
Function Add(x As Integer, y As Integer) As Integer
    Try
        ' Check for Integer overflow
        If x > Integer.MaxValue - y Then
            Throw New OverflowException("Result would exceed maximum integer value")
        End If
        Return x + y
    Catch ex As OverflowException
        Console.WriteLine("Arithmetic error: " & ex.Message)
        Throw
    End Try
End Function

' Basic Procedure with error handling
Sub PrintMessage(message As String)
    Try
        If message Is Nothing Then
            Throw New ArgumentNullException("message")
        End If
        Console.WriteLine(message)
    Catch ex As ArgumentNullException
        Console.WriteLine("Error: Message cannot be null")
        Throw
    End Try
End Sub"#,
            ),
            LessonSection::new("Method Components", "Every method is built from:").with_list(&[
                "Name - Meaningful identifier for the method",
                "Parameters - Input values (optional)",
                "Return Type - For functions only",
                "Access Modifier - Public, Private, Protected, etc.",
            ]),
        ],
    },
    TopicTab {
        key: "functions",
        label: "Functions",
        heading: "Function Types",
        sections: &[
            LessonSection::new("1. Simple Functions", "A function computes and returns one value.")
                .with_code(
                    r#"Function CalculateArea(radius As Double) As Double
    Try
        If radius < 0 Then
            Throw New ArgumentException("Radius cannot be negative")
        End If
        If Double.IsNaN(radius) OrElse Double.IsInfinity(radius) Then
            Throw New ArgumentException("Invalid radius value")
        End If
        Return Math.PI * radius * radius
    Catch ex As ArgumentException
        Console.WriteLine("Validation error: " & ex.Message)
        Throw
    End Try
End Function"#,
                ),
            LessonSection::new(
                "2. Functions with Multiple Parameters",
                "Parameters can be required or `Optional` with a default value.",
            )
            .with_code(
                r#"Function FormatFullName(firstName As String, 
                     lastName As String, 
                     Optional title As String = "") As String
    Try
        If firstName Is Nothing OrElse lastName Is Nothing Then
            Throw New ArgumentNullException("Name parameters cannot be null")
        End If
        If String.IsNullOrWhiteSpace(firstName) OrElse 
           String.IsNullOrWhiteSpace(lastName) Then
            Throw New ArgumentException("Name parameters cannot be empty")
        End If
        Return If(title = "", "", title & " ") & firstName & " " & lastName
    Catch ex As ArgumentNullException
        Console.WriteLine("Null argument error: " & ex.Message)
        Throw
    Catch ex As ArgumentException
        Console.WriteLine("Validation error: " & ex.Message)
        Throw
    End Try
End Function"#,
            ),
            LessonSection::new(
                "3. Functions with Different Return Types",
                "The `As` clause after the parameter list declares what comes back.",
            )
            .with_code(
                r#"Function IsValidAge(age As Integer) As Boolean
    Try
        If age < 0 Then
            Throw New ArgumentException("Age cannot be negative")
        End If
        Return age >= 0 AndAlso age <= 120
    Catch ex As ArgumentException
        Console.WriteLine("Validation error: " & ex.Message)
        Throw
    End Try
End Function

Function GetUserStatus(id As Integer) As String
    Try
        If id < 1 Then
            Throw New ArgumentException("Invalid user ID")
        End If
        ' Simulated database lookup
        ' Return "Active", "Inactive", or "Suspended"
        Return "Active"
    Catch ex As ArgumentException
        Console.WriteLine("Validation error: " & ex.Message)
        Throw
    Catch ex As Exception
        Console.WriteLine("Database error: " & ex.Message)
        Throw
    End Try
End Function"#,
            ),
            LessonSection::new("Function Best Practices", "").with_list(&[
                "Use clear, descriptive names",
                "Keep functions focused on a single task",
                "Validate input parameters",
                "Handle errors appropriately",
                "Document complex logic",
                "Consider using Optional parameters",
            ]),
        ],
    },
    TopicTab {
        key: "procedures",
        label: "Procedures",
        heading: "Procedure (Sub) Types",
        sections: &[
            LessonSection::new("1. Simple Procedures", "A `Sub` performs an action and returns nothing.")
                .with_code(
                    r#"Sub DisplayWelcome()
    Try
        ' Simulate potential I/O operation
        Console.WriteLine("Welcome to our application!")
    Catch ex As System.IO.IOException
        Console.WriteLine("Error writing to console: " & ex.Message)
        Throw
    End Try
End Sub"#,
                ),
            LessonSection::new("2. Procedures with Parameters", "Validate inputs before acting on them.")
                .with_code(
                    r#"Sub SaveUserData(name As String, age As Integer)
    Try
        ' Validate inputs
        If String.IsNullOrWhiteSpace(name) Then
            Throw New ArgumentException("Name cannot be empty")
        End If
        If age < 0 OrElse age > 120 Then
            Throw New ArgumentOutOfRangeException("age", 
                "Age must be between 0 and 120")
        End If
        
        ' Simulate database operation
        Console.WriteLine($"Saving: {name}, Age: {age}")
        
    Catch ex As ArgumentException
        Console.WriteLine("Validation error: " & ex.Message)
        Throw
    Catch ex As Exception
        Console.WriteLine("Database error: " & ex.Message)
        Throw
    End Try
End Sub"#,
                ),
            LessonSection::new(
                "3. Procedures with ByRef Parameters",
                "`ByRef` lets a procedure write back to the caller's variables.",
            )
            .with_code(
                r#"Sub SwapValues(ByRef a As Integer, ByRef b As Integer)
    Try
        ' Check for overflow in temporary variable
        If a = Integer.MinValue OrElse b = Integer.MinValue Then
            Throw New OverflowException("Cannot swap Integer.MinValue")
        End If
        
        Dim temp As Integer = a
        a = b
        b = temp
        
    Catch ex As OverflowException
        Console.WriteLine("Arithmetic error: " & ex.Message)
        Throw
    Catch ex As Exception
        Console.WriteLine("Unexpected error: " & ex.Message)
        Throw
    End Try
End Sub"#,
            ),
            LessonSection::new("Procedure Best Practices", "").with_list(&[
                "Use procedures for actions that don't need to return values",
                "Use meaningful parameter names",
                "Consider using ByRef when you need to modify parameter values",
                "Include error handling for robust code",
                "Keep procedures focused and manageable",
            ]),
        ],
    },
    TopicTab {
        key: "advanced",
        label: "Advanced Topics",
        heading: "Advanced Features",
        sections: &[
            LessonSection::new("1. Function Overloading", "Same name, different parameter lists.")
                .with_code(
                    r#"Function Calculate(x As Integer, y As Integer) As Integer
    Return x + y
End Function

Function Calculate(x As Double, y As Double) As Double
    Return x + y
End Function"#,
                ),
            LessonSection::new("2. Optional Parameters", "Callers may omit trailing arguments.")
                .with_code(
                    r#"Function GetDiscount(price As Decimal, 
                   Optional rate As Decimal = 0.1D, 
                   Optional isVIP As Boolean = False) As Decimal
    If isVIP Then rate *= 2
    Return price * rate
End Function"#,
                ),
            LessonSection::new(
                "3. ParamArray for Variable Arguments",
                "Accept any number of arguments as an array.",
            )
            .with_code(
                r#"Function Sum(ParamArray numbers() As Integer) As Integer
    Dim total As Integer = 0
    For Each num In numbers
        total += num
    Next
    Return total
End Function"#,
            ),
            LessonSection::new("Error Handling", "Catch specific exceptions before general ones.")
                .with_code(
                    r#"Function DivideNumbers(x As Double, y As Double) As Double
    Try
        If y = 0 Then
            Throw New DivideByZeroException()
        End If
        Return x / y
    Catch ex As DivideByZeroException
        Console.WriteLine("Cannot divide by zero")
        Return 0
    Catch ex As Exception
        Console.WriteLine("An error occurred: " & ex.Message)
        Return 0
    End Try
End Function"#,
                ),
        ],
    },
];

pub static PRACTICE: &[PracticeTemplate] = &[
    PracticeTemplate {
        rule_set: RuleSet::Basics,
        prompt: "Practice creating basic Functions and Subs with proper parameter declarations and error handling.",
        template: r#"' Basic Function Example
Function Add(x As Integer, y As Integer) As Integer
    Try
        If x > Integer.MaxValue - y Then
            Throw New OverflowException("Result would exceed maximum integer value")
        End If
        Return x + y
    Catch ex As Exception
        Console.WriteLine("Error: " & ex.Message)
        Throw
    End Try
End Function

' Basic Sub Example
Sub DisplayMessage(message As String)
    Try
        If message Is Nothing Then
            Throw New ArgumentNullException("message")
        End If
        Console.WriteLine(message)
    Catch ex As Exception
        Console.WriteLine("Error: " & ex.Message)
        Throw
    End Try
End Sub"#,
    },
    PracticeTemplate {
        rule_set: RuleSet::Functions,
        prompt: "Practice creating Functions with different return types, multiple parameters, and proper error handling.",
        template: r#"' Function with Multiple Parameters and Return Type
Function CalculateTotal(price As Decimal, 
                       quantity As Integer,
                       Optional discount As Decimal = 0) As Decimal
    Try
        If price < 0 OrElse quantity < 0 Then
            Throw New ArgumentException("Price and quantity must be positive")
        End If
        
        Dim total As Decimal = price * quantity
        Return total * (1 - discount)
        
    Catch ex As Exception
        Console.WriteLine("Error: " & ex.Message)
        Throw
    End Try
End Function"#,
    },
    PracticeTemplate {
        rule_set: RuleSet::Procedures,
        prompt: "Practice creating Sub procedures with ByRef parameters and proper error handling.",
        template: r#"' Sub Procedure with ByRef Parameters
Sub SwapValues(ByRef a As Integer, ByRef b As Integer)
    Try
        Dim temp As Integer = a
        a = b
        b = temp
        
        Console.WriteLine("Values swapped successfully!")
        Console.WriteLine($"a = {a}, b = {b}")
        
    Catch ex As Exception
        Console.WriteLine("Error: " & ex.Message)
        Throw
    End Try
End Sub"#,
    },
    PracticeTemplate {
        rule_set: RuleSet::Advanced,
        prompt: "Practice creating advanced features like function overloading, optional parameters, and ParamArray.",
        template: r#"' Advanced Function with Overloading and ParamArray
Function Calculate(x As Integer, y As Integer) As Integer
    Return x + y
End Function

Function Calculate(x As Double, y As Double) As Double
    Return x * y
End Function

Function Calculate(ParamArray numbers() As Integer) As Integer
    Try
        If numbers.Length = 0 Then
            Throw New ArgumentException("At least one number is required")
        End If
        
        Dim total As Integer = 0
        For Each num In numbers
            total += num
        Next
        Return total
        
    Catch ex As Exception
        Console.WriteLine("Error: " & ex.Message)
        Throw
    End Try
End Function"#,
    },
];

pub static TIPS: &[LessonSection] = &[
    LessonSection::new(
        "1. Dynamic Number Processor",
        "Create a flexible function that processes numbers differently based on input count.",
    )
    .with_code(
        r#"Function ProcessNumbers(ParamArray numbers() As Double) As Double
    Try
        If numbers Is Nothing OrElse numbers.Length = 0 Then
            Throw New ArgumentException("Must provide at least one number")
        End If
        
        Select Case numbers.Length
            Case 1  ' Square the number
                Return numbers(0) * numbers(0)
            Case 2  ' Add numbers
                Return numbers(0) + numbers(1)
            Case Else  ' Calculate average
                Dim total As Double = 0
                For Each num In numbers
                    total += num
                Next
                Return total / numbers.Length
        End Select
        
    Catch ex As ArgumentException
        Console.WriteLine($"Input error: {ex.Message}")
        Throw
    End Try
End Function"#,
    ),
    LessonSection::new(
        "2. String Processor",
        "Process strings with optional parameters and proper error handling.",
    )
    .with_code(
        r#"Function FormatText(text As String, 
                  Optional upperCase As Boolean = False,
                  Optional trim As Boolean = True) As String
    Try
        If text Is Nothing Then
            Throw New ArgumentNullException(NameOf(text))
        End If
        
        Dim result As String = text
        If trim Then result = result.Trim()
        If upperCase Then result = result.ToUpper()
        Return result
        
    Catch ex As ArgumentNullException
        Console.WriteLine($"Input error: {ex.Message}")
        Throw
    End Try
End Function"#,
    ),
    LessonSection::new("Best Practices", "").with_list(&[
        "Always include proper error handling with Try-Catch blocks",
        "Use meaningful variable and parameter names",
        "Validate all input parameters",
        "Document any assumptions or limitations",
        "Use Optional parameters when appropriate",
        "Return meaningful error messages",
        "Keep functions focused on a single task",
    ]),
];

/// Practice guidance for a rule set; `None` for rule sets owned by other topics.
#[must_use]
pub fn practice_for(rule_set: RuleSet) -> Option<&'static PracticeTemplate> {
    PRACTICE.iter().find(|entry| entry.rule_set == rule_set)
}
