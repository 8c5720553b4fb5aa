use crate::model::{Lesson, LessonSection};

pub const TITLE: &str = "VB.NET: Basic Concepts";

pub static LESSONS: &[Lesson] = &[
    Lesson {
        id: 1,
        title: "Introduction to Visual Basic 2019",
        sections: &[
            LessonSection::new(
                "What is Visual Basic 2019",
                "Visual Basic 2019 is an object-oriented programming language which is very easy to learn. The language is designed for creating type-safe and object-oriented applications quickly and efficiently.",
            )
            .with_image("/assets/vbnet-images/vs2019-start.png"),
            LessonSection::new("The Visual Studio 2019 IDE", "The Visual Studio IDE consists of:")
                .with_list(&[
                    "Menu Bar - Contains commands for controlling the IDE",
                    "Toolbox - Contains all the controls for building your application",
                    "Solution Explorer - Shows all files in your project",
                    "Properties Window - Shows properties of selected items",
                    "Form Designer - Visual interface for creating forms",
                    "Code Editor - Where you write and edit code",
                ])
                .with_image("/assets/vbnet-images/vs2019-ide.png"),
        ],
    },
    Lesson {
        id: 2,
        title: "Your First VB Program",
        sections: &[LessonSection::new(
            "Creating a New Project",
            "Steps to create your first VB.NET program:",
        )
        .with_list(&[
            "Start Visual Studio 2019",
            "Click on 'Create a new project'",
            "Select 'Windows Forms App (.NET Framework)'",
            "Choose a name and location for your project",
        ])
        .with_image("/assets/vbnet-images/new-project.png")],
    },
    Lesson {
        id: 3,
        title: "Data Types & Variables",
        sections: &[LessonSection::new("VB.NET Data Types", "Common data types in VB.NET:")
            .with_list(&[
                "Integer - Whole numbers",
                "Double - Decimal numbers",
                "String - Text data",
                "Boolean - True/False values",
                "Date - Date and time values",
            ])
            .with_code(
                r#"Dim age As Integer = 25
Dim price As Double = 99.99
Dim name As String = "John"
Dim isValid As Boolean = True
Dim today As Date = Date.Now"#,
            )],
    },
    Lesson {
        id: 4,
        title: "Control Structures",
        sections: &[
            LessonSection::new("If...Then Statement", "Basic conditional statements in VB.NET:")
                .with_code(
                    r#"If age >= 18 Then
    MessageBox.Show("You are an adult")
Else
    MessageBox.Show("You are a minor")
End If"#,
                )
                .with_image("/assets/vbnet-images/if-then.png"),
            LessonSection::new(
                "Select Case Statement",
                "Alternative to multiple If...Then statements:",
            )
            .with_code(
                r#"Select Case grade
    Case "A"
        MessageBox.Show("Excellent!")
    Case "B"
        MessageBox.Show("Good job!")
    Case "C"
        MessageBox.Show("You passed")
    Case Else
        MessageBox.Show("Try harder")
End Select"#,
            ),
        ],
    },
    Lesson {
        id: 5,
        title: "Loops",
        sections: &[
            LessonSection::new("For...Next Loop", "Used when you know the number of iterations:")
                .with_code(
                    r#"For i As Integer = 1 To 5
    MessageBox.Show("Count: " & i)
Next"#,
                )
                .with_image("/assets/vbnet-images/for-loop.png"),
            LessonSection::new(
                "Do While Loop",
                "Used when you don't know the number of iterations:",
            )
            .with_code(
                r#"Do While count > 0
    ProcessItem()
    count -= 1
Loop"#,
            ),
        ],
    },
    Lesson {
        id: 6,
        title: "Arrays and Collections",
        sections: &[
            LessonSection::new("Arrays", "Working with fixed-size collections of data:").with_code(
                r#"' Declaring and using arrays
Dim numbers(4) As Integer  ' Creates a 5-element array
numbers(0) = 10
numbers(1) = 20
numbers(2) = 30
numbers(3) = 40
numbers(4) = 50"#,
            ),
            LessonSection::new("List Collections", "Working with dynamic collections:").with_code(
                r#"' Using List(Of T)
Dim names As New List(Of String)
names.Add("John")
names.Add("Jane")
names.Add("Bob")"#,
            ),
        ],
    },
    Lesson {
        id: 7,
        title: "Functions and Procedures",
        sections: &[
            LessonSection::new("Functions", "Functions return values:")
                .with_code(
                    r#"Function CalculateArea(ByVal width As Double, ByVal height As Double) As Double
    Return width * height
End Function"#,
                )
                .with_image("/assets/vbnet-images/functions.png"),
            LessonSection::new("Subroutines (Procedures)", "Procedures don't return values:")
                .with_code(
                    r#"Sub DisplayMessage(ByVal message As String)
    MessageBox.Show(message)
End Sub"#,
                ),
        ],
    },
    Lesson {
        id: 8,
        title: "Working with Forms",
        sections: &[
            LessonSection::new("Form Properties", "Common form properties you can set:")
                .with_list(&[
                    "Text - The title of the form",
                    "BackColor - Background color",
                    "Size - Width and height",
                    "StartPosition - Initial position when form loads",
                    "FormBorderStyle - Appearance of form borders",
                ])
                .with_image("/assets/vbnet-images/form-properties.png"),
            LessonSection::new("Form Events", "Important form events to handle:")
                .with_list(&[
                    "Load - When form first loads",
                    "Click - When form is clicked",
                    "Closing - Before form closes",
                    "Resize - When form size changes",
                ])
                .with_code(
                    r#"Private Sub Form1_Load(sender As Object, e As EventArgs) Handles MyBase.Load
    ' Code to run when form loads
End Sub"#,
                ),
        ],
    },
    Lesson {
        id: 9,
        title: "Common Controls",
        sections: &[
            LessonSection::new("TextBox Control", "For user input:")
                .with_code(
                    r#"' Getting text from TextBox
Dim userInput As String = TextBox1.Text

' Setting text in TextBox
TextBox1.Text = "Hello World""#,
                )
                .with_image("/assets/vbnet-images/textbox.png"),
            LessonSection::new("Button Control", "For user actions:").with_code(
                r#"Private Sub Button1_Click(sender As Object, e As EventArgs) Handles Button1.Click
    MessageBox.Show("Button was clicked!")
End Sub"#,
            ),
        ],
    },
    Lesson {
        id: 10,
        title: "Error Handling",
        sections: &[LessonSection::new("Try...Catch", "Basic error handling in VB.NET:")
            .with_code(
                r#"Try
    Dim result As Integer = number1 / number2
Catch ex As DivideByZeroException
    MessageBox.Show("Cannot divide by zero!")
Catch ex As Exception
    MessageBox.Show("An error occurred: " & ex.Message)
Finally
    ' Code that runs whether there was an error or not
End Try"#,
            )
            .with_image("/assets/vbnet-images/error-handling.png")],
    },
];

/// Reference sections shown below whichever lesson is selected.
pub static OVERVIEW: &[LessonSection] = &[
    LessonSection::new(
        "What is Visual Basic 2019?",
        "Visual Basic 2019 is the latest version of Visual Basic, a popular programming language developed by Microsoft. It is now part of Visual Studio 2019, a complete integrated development environment (IDE). Some key points about VB 2019:",
    )
    .with_list(&[
        "It's an object-oriented programming language",
        "Helps create Windows applications quickly and easily",
        "Includes powerful tools for development",
        "Fully integrated with the .NET Framework",
    ]),
    LessonSection::new("Visual Studio IDE", "**Main Components:**").with_list(&[
        "Menu Bar - Contains all commands needed to control the IDE",
        "Toolbar - Quick access to commonly used commands",
        "Solution Explorer - Shows all files in your project",
        "Properties Window - Displays and modifies object properties",
        "Form Designer - Visual interface for creating forms",
        "Code Editor - Where you write and edit code",
    ]),
    LessonSection::new(
        "Writing Your First Program",
        "A simple \"Hello World\" program in VB.NET:",
    )
    .with_code(
        r#"Public Class Form1
    Private Sub Form1_Load(sender As Object, e As EventArgs) Handles MyBase.Load
        MessageBox.Show("Hello World!")
    End Sub
End Class"#,
    )
    .with_description("**Program Breakdown:**")
    .with_list(&[
        "Public Class Form1 - Defines the main form of the application",
        "Private Sub - Declares a procedure that handles the form loading",
        "MessageBox.Show - Displays a message box with text",
    ]),
    LessonSection::new(
        "Project Types",
        "**Visual Basic 2019 lets you create various types of applications:**",
    )
    .with_list(&[
        "Windows Forms Applications - Traditional desktop apps",
        "Console Applications - Text-based programs",
        "WPF Applications - Modern UI applications",
        "Web Applications - Browser-based programs",
        "Class Libraries - Reusable code components",
    ]),
    LessonSection::new("Basic Programming Concepts", "**Key Elements:**")
        .with_list(&[
            "Variables - Store and manipulate data",
            "Data Types - Define what kind of data can be stored",
            "Operators - Perform operations on data",
            "Control Structures - Control program flow",
            "Procedures - Organize and reuse code",
        ])
        .with_code(
            r#"Dim strName As String           'Declare a string variable
Dim intAge As Integer           'Declare an integer variable
Dim dblPrice As Double          'Declare a double variable
Dim blnIsValid As Boolean       'Declare a boolean variable"#,
        ),
    LessonSection::new("Visual Basic Editions", "Visual Studio ships in three editions:").with_list(&[
        "Visual Basic Community Edition - Free for students, open-source developers, and individual developers",
        "Visual Basic Professional Edition - For professional developers",
        "Visual Basic Enterprise Edition - For enterprise development teams",
    ]),
    LessonSection::new("Writing Code in VB.NET", "**Basic Rules:**")
        .with_list(&[
            "Each statement must be written in one line",
            "To continue a statement in the next line, use the underscore (_) symbol",
            "Use apostrophe (') for comments",
            "Keywords are not case sensitive",
        ])
        .with_code(
            r#"MessageBox.Show("This is a very long message that " & _
                 "needs to be continued on the next line")

' This is a comment
Dim MyNumber As Integer   'This declares a variable"#,
        ),
    LessonSection::new("Common Controls", "**Basic Form Controls:**").with_list(&[
        "Form - The window that holds other controls",
        "Label - Displays text that users can't change",
        "TextBox - Allows users to input or edit text",
        "Button - Performs an action when clicked",
        "ComboBox - Provides a dropdown list of choices",
        "CheckBox - Allows yes/no or true/false selections",
    ]),
    LessonSection::new("Getting Started Steps", "From installation to your first form:").with_steps(&[
        "Install Visual Studio 2019 (Community Edition is free)",
        "Launch Visual Studio",
        "Select \"Create a new project\"",
        "Choose \"Windows Forms App (.NET Framework)\"",
        "Name your project and choose location",
        "Start building your application",
    ]),
];
