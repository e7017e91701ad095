use crossterm::style::Color;

/// Colors for puzzle printouts; `None` prints unstyled
#[derive(Debug, Clone, Default)]
pub struct Theme {
    /// Section header color
    pub header: Option<Color>,
    /// Letter word color
    pub letter: Option<Color>,
    /// Digit color in the solution
    pub digit: Option<Color>,
    /// Operator and `=` color
    pub op: Option<Color>,
    /// Diagnostics text color
    pub info: Option<Color>,
}

impl Theme {
    /// Dark terminal theme
    pub fn dark() -> Self {
        Self {
            header: Some(Color::Rgb { r: 255, g: 210, b: 100 }),
            letter: Some(Color::Rgb { r: 255, g: 255, b: 255 }),
            digit: Some(Color::Rgb { r: 80, g: 180, b: 255 }),
            op: Some(Color::Rgb { r: 130, g: 140, b: 170 }),
            info: Some(Color::Rgb { r: 160, g: 165, b: 185 }),
        }
    }

    /// No colors, for pipes and files
    pub fn plain() -> Self {
        Self::default()
    }
}
