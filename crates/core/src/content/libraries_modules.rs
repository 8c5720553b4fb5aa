use crate::model::LessonSection;

pub const TITLE: &str = "Libraries & Modules in VB.NET";

/// Bare sections, navigated by 0-based position.
pub static SECTIONS: &[LessonSection] = &[
    LessonSection::new(
        "Built-in Libraries",
        "VB.NET comes with a rich set of built-in libraries in the .NET Framework",
    )
    .with_description(
        "Learn about the essential built-in libraries that make VB.NET development more efficient",
    )
    .with_list(&[
        "System: Core functionality, base types, and essential features",
        "System.Collections: Arrays, lists, dictionaries, and other data structures",
        "System.IO: File and stream handling operations",
        "System.Data: Database access and manipulation",
        "System.Net: Network programming and web services",
        "System.Windows.Forms: GUI development",
        "System.Xml: XML processing and manipulation",
    ]),
    LessonSection::new(
        "Modules in VB.NET",
        "Modules are containers for shared members that can be accessed without creating an instance",
    )
    .with_description("Understanding modules and their usage in VB.NET applications")
    .with_code(
        r#"' Standard Module declaration
Module MathUtilities
    ' Shared variables (accessible without instance)
    Public Shared Pi As Double = 3.14159
    Private Shared calculationCount As Integer = 0

    ' Shared function
    Public Shared Function CalculateCircleArea(radius As Double) As Double
        calculationCount += 1
        Return Pi * radius * radius
    End Function

    ' Shared sub procedure
    Public Shared Sub ResetCalculationCount()
        calculationCount = 0
    End Sub

    ' Shared read-only property
    Public Shared ReadOnly Property CalculationsPerformed As Integer
        Get
            Return calculationCount
        End Get
    End Property
End Module

' Using the module
Public Class CircleCalculator
    Public Sub DisplayArea(radius As Double)
        Dim area = MathUtilities.CalculateCircleArea(radius)
        Console.WriteLine($"Area: {area}")
        Console.WriteLine($"Calculations performed: {MathUtilities.CalculationsPerformed}")
    End Sub
End Class"#,
    ),
    LessonSection::new(
        "Creating Custom Libraries",
        "Learn how to create and distribute your own class libraries",
    )
    .with_description("Build reusable components that can be shared across multiple projects")
    .with_steps(&[
        "Create a Class Library project in Visual Studio",
        "Implement your classes and functionality",
        "Build the library as a DLL",
        "Reference the library in other projects",
        "Create XML documentation for IntelliSense support",
    ])
    .with_code(
        r#"' Custom Library Example (SaveToFile.dll)
Imports System.IO

Public Class FileManager
    Private ReadOnly basePath As String

    Public Sub New(path As String)
        basePath = path
    End Sub

    Public Function SaveText(fileName As String, content As String) As Boolean
        Try
            File.WriteAllText(Path.Combine(basePath, fileName), content)
            Return True
        Catch ex As Exception
            Return False
        End Try
    End Function

    Public Function LoadText(fileName As String) As String
        Return File.ReadAllText(Path.Combine(basePath, fileName))
    End Function
End Class

' Using the custom library in another project
Imports SaveToFile

Public Class DocumentManager
    Private ReadOnly fileManager As New FileManager("C:\Documents")

    Public Sub SaveDocument(name As String, content As String)
        If fileManager.SaveText(name, content) Then
            Console.WriteLine("Document saved successfully")
        End If
    End Sub
End Class"#,
    ),
    LessonSection::new(
        "NuGet Package Management",
        "Using NuGet to manage external libraries and dependencies",
    )
    .with_description("Learn how to find, install, and update third-party libraries using NuGet")
    .with_steps(&[
        "Open NuGet Package Manager in Visual Studio",
        "Search for desired packages",
        "Install selected packages",
        "Update packages when new versions are available",
        "Manage package dependencies",
    ])
    .with_examples(&[
        "Install-Package Newtonsoft.Json",
        "Install-Package MySql.Data",
        "Install-Package System.Data.SQLite",
    ])
    .with_code(
        r#"' Using Newtonsoft.Json NuGet package
Imports Newtonsoft.Json

Public Class Person
    Public Property Name As String
    Public Property Age As Integer
    Public Property Email As String
End Class

Public Class JsonExample
    Public Sub SerializeObject()
        Dim person As New Person With {
            .Name = "John Doe",
            .Age = 30,
            .Email = "john@example.com"
        }

        ' Serialize to JSON
        Dim jsonString = JsonConvert.SerializeObject(person, Formatting.Indented)
        Console.WriteLine(jsonString)

        ' Deserialize from JSON
        Dim deserializedPerson = JsonConvert.DeserializeObject(Of Person)(jsonString)
        Console.WriteLine($"Name: {deserializedPerson.Name}")
    End Sub
End Class"#,
    ),
    LessonSection::new(
        "Best Practices",
        "Guidelines for using libraries and modules effectively",
    )
    .with_list(&[
        "Keep modules focused and single-responsibility",
        "Use meaningful names for modules and their members",
        "Document public interfaces and methods",
        "Implement proper error handling",
        "Consider performance implications",
        "Use appropriate access modifiers",
        "Follow naming conventions",
        "Create unit tests for library code",
    ]),
];
