use crate::model::{Lesson, LessonSection};

pub const TITLE: &str = "Object-Oriented Programming in VB.NET";

pub static LESSONS: &[Lesson] = &[
    Lesson {
        id: 1,
        title: "Classes and Objects",
        sections: &[
            LessonSection::new(
                "Understanding Classes",
                "A class is a blueprint for creating objects. It defines **properties** (data) and **methods** (behavior).",
            )
            .with_code(
                r#"' Class definition
Public Class Student
    ' Properties
    Public Property Name As String
    Public Property Age As Integer
    Private _grade As String

    ' Constructor
    Public Sub New(name As String, age As Integer)
        Me.Name = name
        Me.Age = age
    End Sub

    ' Method
    Public Function GetDetails() As String
        Return $"Name: {Name}, Age: {Age}"
    End Function
End Class

' Creating an object
Dim student1 As New Student("John Smith", 20)"#,
            )
            .with_image("/assets/vbnet-images/class-object.png"),
            LessonSection::new(
                "Properties and Fields",
                "Properties provide a way to access and modify object data safely:",
            )
            .with_code(
                r#"Public Class BankAccount
    ' Private field
    Private _balance As Decimal

    ' Property with validation
    Public Property Balance As Decimal
        Get
            Return _balance
        End Get
        Set(value As Decimal)
            If value >= 0 Then
                _balance = value
            Else
                Throw New ArgumentException("Balance cannot be negative")
            End If
        End Set
    End Property
End Class"#,
            ),
        ],
    },
    Lesson {
        id: 2,
        title: "Inheritance",
        sections: &[LessonSection::new(
            "Class Inheritance",
            "Inheritance allows you to create new classes based on existing classes:",
        )
        .with_code(
            r#"' Base class
Public Class Vehicle
    Public Property Brand As String
    Public Property Model As String

    Public Overridable Function GetInfo() As String
        Return $"{Brand} {Model}"
    End Function
End Class

' Derived class
Public Class Car
    Inherits Vehicle

    Public Property NumDoors As Integer

    Public Overrides Function GetInfo() As String
        Return $"{Brand} {Model} with {NumDoors} doors"
    End Function
End Class"#,
        )
        .with_image("/assets/vbnet-images/inheritance.png")],
    },
    Lesson {
        id: 3,
        title: "Polymorphism",
        sections: &[
            LessonSection::new(
                "Method Overriding",
                "Polymorphism allows different classes to implement methods in their own way:",
            )
            .with_code(
                r#"Public Class Animal
    Public Overridable Function MakeSound() As String
        Return "Some sound"
    End Function
End Class

Public Class Dog
    Inherits Animal
    Public Overrides Function MakeSound() As String
        Return "Woof!"
    End Function
End Class

Public Class Cat
    Inherits Animal
    Public Overrides Function MakeSound() As String
        Return "Meow!"
    End Function
End Class"#,
            ),
            LessonSection::new(
                "Method Overloading",
                "Multiple versions of a method with different parameters:",
            )
            .with_code(
                r#"Public Class Calculator
    Public Function Add(x As Integer, y As Integer) As Integer
        Return x + y
    End Function

    Public Function Add(x As Double, y As Double) As Double
        Return x + y
    End Function

    Public Function Add(numbers As Integer()) As Integer
        Return numbers.Sum()
    End Function
End Class"#,
            ),
        ],
    },
    Lesson {
        id: 4,
        title: "Encapsulation",
        sections: &[LessonSection::new("Access Modifiers", "Control access to class members:")
            .with_list(&[
                "Public - Accessible from anywhere",
                "Private - Only accessible within the same class",
                "Protected - Accessible in the same class and derived classes",
                "Friend - Accessible within the same project",
            ])
            .with_code(
                r#"Public Class Employee
    Private _salary As Decimal
    Protected _department As String
    Friend _companyName As String

    Public Property Name As String

    Private Sub CalculateBonus()
        ' Internal calculation
    End Sub

    Public Function GetYearlyReport() As String
        ' Public interface
        Return "Report data"
    End Function
End Class"#,
            )],
    },
    Lesson {
        id: 5,
        title: "Interfaces",
        sections: &[LessonSection::new(
            "Interface Implementation",
            "Interfaces define a contract that classes must follow:",
        )
        .with_code(
            r#"Public Interface IPayable
    Function CalculatePayment() As Decimal
End Interface

Public Class Invoice
    Implements IPayable

    Public Property Amount As Decimal

    Public Function CalculatePayment() As Decimal _
    Implements IPayable.CalculatePayment
        Return Amount + (Amount * 0.1) ' With 10% tax
    End Function
End Class"#,
        )
        .with_image("/assets/vbnet-images/interfaces.png")],
    },
    Lesson {
        id: 6,
        title: "Abstract Classes",
        sections: &[LessonSection::new(
            "Abstract Class Usage",
            "Abstract classes provide a base for other classes:",
        )
        .with_code(
            r#"Public MustInherit Class Shape
    Public MustOverride Function CalculateArea() As Double
    Public MustOverride Function CalculatePerimeter() As Double

    Public Function GetInfo() As String
        Return $"Area: {CalculateArea()}, Perimeter: {CalculatePerimeter()}"
    End Function
End Class

Public Class Circle
    Inherits Shape

    Public Property Radius As Double

    Public Overrides Function CalculateArea() As Double
        Return Math.PI * Radius * Radius
    End Function

    Public Overrides Function CalculatePerimeter() As Double
        Return 2 * Math.PI * Radius
    End Function
End Class"#,
        )],
    },
];
