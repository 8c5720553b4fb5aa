use crate::model::{LessonSection, TopicTab};

pub const TITLE: &str = "Debugging in VB.NET";

pub const PRACTICE_HEADING: &str = "Debug Practice Scenarios";

pub static TABS: &[TopicTab] = &[
    TopicTab {
        key: "basics",
        label: "Debugging Basics",
        heading: "Debugging Fundamentals",
        sections: &[
            LessonSection::new("1. Debug vs Release Mode", "").with_list(&[
                "Debug mode includes additional information for debugging",
                "Release mode optimizes code for performance",
                "Switch between modes in Visual Studio's toolbar",
            ]),
            LessonSection::new("2. Basic Debug Controls", "").with_list(&[
                "F5: Start Debugging",
                "Shift+F5: Stop Debugging",
                "Ctrl+F5: Start Without Debugging",
                "F10: Step Over",
                "F11: Step Into",
                "Shift+F11: Step Out",
            ]),
            LessonSection::new("3. Debug Output", "").with_code(
                r#"' Using Debug.Print for debugging output
Debug.Print("Variable value: " & myVariable)

' Using Debug.Assert for conditions
Debug.Assert(myVariable > 0, "myVariable must be positive")

' Using Debug.WriteLine with categories
Debug.WriteLine("Processing started", "Status")"#,
            ),
        ],
    },
    TopicTab {
        key: "breakpoints",
        label: "Breakpoints",
        heading: "Working with Breakpoints",
        sections: &[
            LessonSection::new("1. Setting Breakpoints", "").with_list(&[
                "Click in the left margin or press F9",
                "Right-click for additional options",
                "Use conditional breakpoints for specific scenarios",
            ]),
            LessonSection::new("2. Conditional Breakpoints", "").with_code(
                r#"' Example of where you might set a conditional breakpoint:
For i As Integer = 1 To 100
    ' Set condition: Break when i = 50
    ProcessItem(i)
Next

' Example of a hit count breakpoint:
While ProcessRecords()
    ' Break after 10 iterations
    HandleRecord()
End While"#,
            ),
            LessonSection::new("3. Tracepoints", "").with_code(
                r#"' Example of where to use a tracepoint:
Public Sub ProcessOrder(order As Order)
    ' Add tracepoint to log order details
    ValidateOrder(order)
    ' Add tracepoint to log validation result
    ProcessPayment(order)
    ' Add tracepoint to log payment status
End Sub"#,
            ),
        ],
    },
    TopicTab {
        key: "watches",
        label: "Watch & Locals",
        heading: "Watch Windows & Local Variables",
        sections: &[
            LessonSection::new("1. Watch Window", "")
                .with_list(&[
                    "Add variables to track their values",
                    "Use expressions to monitor computed values",
                    "Multiple watch windows for organization",
                ])
                .with_code(
                    r#"' Examples of watch expressions:
customer.Name                 ' Simple property
orders.Count                 ' Collection count
total > 1000                ' Boolean condition
String.Format("{0:C}", price) ' Formatted value"#,
                ),
            LessonSection::new("2. Locals Window", "").with_list(&[
                "Automatically shows all local variables",
                "Red values indicate changes",
                "Expand objects to see properties",
            ]),
            LessonSection::new("3. QuickWatch", "").with_code(
                r#"' Example code to practice QuickWatch:
Dim customer As New Customer
customer.Name = "John Doe"
customer.Orders.Add(New Order(100))
' Use QuickWatch to inspect:
' customer.Orders.Count
' customer.Orders(0).Total
' customer.GetOrderTotal()"#,
            ),
        ],
    },
    TopicTab {
        key: "advanced",
        label: "Advanced Techniques",
        heading: "Advanced Debugging Techniques",
        sections: &[
            LessonSection::new("1. Exception Handling", "").with_code(
                r#"' Configure exception settings in VS:
Try
    Dim result = riskyOperation()
Catch ex As CustomException
    ' Set breakpoint here
    Debug.WriteLine(ex.StackTrace)
    ' Use Exception Helper to analyze
Finally
    ' Check cleanup operations
End Try"#,
            ),
            LessonSection::new("2. Memory Windows", "").with_list(&[
                "View memory contents directly",
                "Track memory leaks",
                "Monitor object lifetime",
            ]),
            LessonSection::new("3. Remote Debugging", "").with_list(&[
                "Configure remote debugger",
                "Set up authentication",
                "Attach to remote process",
                "Debug production issues",
            ]),
        ],
    },
];

/// Bug-hunting exercises for the practice tab.
pub static PRACTICE_SCENARIOS: &[LessonSection] = &[
    LessonSection::new("Scenario 1: Find the Bug", "").with_code(
        r#"Public Function CalculateTotal(items As List(Of OrderItem)) As Decimal
    Dim total As Decimal = 0
    For i As Integer = 1 To items.Count
        total += items(i).Price * items(i).Quantity
    Next
    Return total
End Function

' Task: Debug why this function throws an exception
' Hint: Check array indexing"#,
    ),
    LessonSection::new("Scenario 2: Performance Issue", "").with_code(
        r#"Public Sub ProcessLargeList(items As List(Of String))
    Dim result As New List(Of String)
    For Each item In items
        If item.StartsWith("A") Then
            result.Add(item)
        End If
        System.Threading.Thread.Sleep(100) ' Simulated work
    Next
End Sub

' Task: Use debugging tools to identify the performance bottleneck
' Hint: Check execution time and loop operations"#,
    ),
    LessonSection::new("Scenario 3: Memory Leak", "").with_code(
        r#"Public Class ResourceManager
    Private resources As New List(Of IDisposable)
    
    Public Sub AddResource(resource As IDisposable)
        resources.Add(resource)
    End Sub
    
    Public Sub CleanupResources()
        resources.Clear()
    End Sub
End Class

' Task: Use debugging tools to find the memory leak
' Hint: Check resource disposal"#,
    ),
];

pub static TIPS: LessonSection = LessonSection::new("Debugging Tips", "").with_list(&[
    "Start with reproducible test cases",
    "Use strategic breakpoints",
    "Check variable values at each step",
    "Pay attention to loop conditions",
    "Monitor resource usage",
    "Use Debug.WriteLine for logging",
]);
