use crate::model::LessonSection;

pub const TITLE: &str = "Database Programming in VB.NET";

pub const QUERY_PLACEHOLDER: &str = "Enter your SQL query (e.g., SELECT * FROM Students)";

pub static LEARN_SECTIONS: &[LessonSection] = &[
    LessonSection::new(
        "Database Connection",
        "ADO.NET talks to SQL Server through a `SqlConnection` built from a connection string.",
    )
    .with_code(
        r#"' Connect to SQL Server Database
Imports System.Data.SqlClient

Public Class DatabaseConnection
    Private connectionString As String = "Server=localhost;Database=School;Trusted_Connection=True;"
    
    Public Function GetConnection() As SqlConnection
        Return New SqlConnection(connectionString)
    End Function
End Class"#,
    ),
    LessonSection::new(
        "Basic CRUD Operations",
        "Wrap connections and commands in `Using` blocks and pass values as **parameters**.",
    )
    .with_code(
        r#"' Insert Data
Using conn As New SqlConnection(connectionString)
    Dim query As String = "INSERT INTO Students (Name, Age, Course) VALUES (@Name, @Age, @Course)"
    Using cmd As New SqlCommand(query, conn)
        cmd.Parameters.AddWithValue("@Name", "John Doe")
        cmd.Parameters.AddWithValue("@Age", 20)
        cmd.Parameters.AddWithValue("@Course", "Computer Science")
        conn.Open()
        cmd.ExecuteNonQuery()
    End Using
End Using"#,
    ),
];

/// Starter code for the ADO.NET check on the practice tab.
pub const DATA_ACCESS_TEMPLATE: &str = r#"' Insert a student with a parameterized command
Sub AddStudent(name As String, age As Integer, course As String)
    Try
        Using conn As New SqlConnection(connectionString)
            Dim query As String = "INSERT INTO Students (Name, Age, Course) VALUES (@Name, @Age, @Course)"
            Using cmd As New SqlCommand(query, conn)
                cmd.Parameters.AddWithValue("@Name", name)
                cmd.Parameters.AddWithValue("@Age", age)
                cmd.Parameters.AddWithValue("@Course", course)
                conn.Open()
                cmd.ExecuteNonQuery()
            End Using
        End Using
    Catch ex As SqlException
        Console.WriteLine("Database error: " & ex.Message)
    End Try
End Sub"#;
