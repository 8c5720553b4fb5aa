use crate::model::TutorialVideo;

pub const TITLE: &str = "Windows Forms Tutorials";

pub static TUTORIALS: &[TutorialVideo] = &[
    TutorialVideo {
        title: "Introduction to Windows Forms",
        url: "https://www.youtube.com/embed/Aq5WXmQQooo?si=uQFCasG-1ohEZ_In",
        description: "Learn the basics of Windows Forms in VB.NET",
    },
    TutorialVideo {
        title: "Creating Your First Form",
        url: "https://www.youtube.com/embed/CkpUQYzYCC8",
        description: "Step-by-step guide to creating forms",
    },
    TutorialVideo {
        title: "Working with Controls",
        url: "https://www.youtube.com/embed/jzwMvvjvwQw",
        description: "Learn about buttons, textboxes, and other controls",
    },
];
