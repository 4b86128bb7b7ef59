//! Resume record model and LaTeX document generation.
//!
//! `generate_latex_resume` is a pure function: the same record always
//! yields the same source. Sections back onto non-empty data only, and
//! every user-authored text field passes through the escaper before
//! insertion; structural fields (dates, locations, URLs) go in verbatim.

use serde::{Deserialize, Serialize};

use super::common::escape_latex;
use crate::utils::error::TemplateError;

/// Contact details for the resume header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
}

/// One work-experience entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub title: String,
    pub organization: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,
    pub current: bool,
}

/// One education entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub grade: Option<String>,
    pub description: Option<String>,
    pub current: bool,
}

/// One project entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub technologies: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// A full structured resume, as produced by the form layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeRecord {
    pub contact_info: ContactInfo,
    pub summary: String,
    pub skills: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
}

impl ResumeRecord {
    /// Parse a record from the JSON the form layer emits.
    ///
    /// Missing optional fields are tolerated; wrong field types are not.
    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The fixed document preamble: packages, layout lengths, and the custom
/// macro set the renderer understands.
const PREAMBLE: &str = r"\documentclass[letterpaper,11pt]{article}

\usepackage{latexsym}
\usepackage[empty]{fullpage}
\usepackage{titlesec}
\usepackage{marvosym}
\usepackage[usenames,dvipsnames]{color}
\usepackage{verbatim}
\usepackage{enumitem}
\usepackage[hidelinks]{hyperref}
\usepackage{fancyhdr}
\usepackage[english]{babel}
\usepackage{tabularx}

\pagestyle{fancy}
\fancyhf{}
\fancyfoot{}
\renewcommand{\headrulewidth}{0pt}
\renewcommand{\footrulewidth}{0pt}

% Adjust margins - reduced top margin to minimize header gap
\addtolength{\oddsidemargin}{-0.5in}
\addtolength{\evensidemargin}{-0.5in}
\addtolength{\textwidth}{1in}
\addtolength{\topmargin}{-0.7in}
\addtolength{\textheight}{1.2in}

\urlstyle{same}

\raggedbottom
\raggedright
\setlength{\tabcolsep}{0in}

% Sections formatting - reduced spacing
\titleformat{\section}{
  \vspace{-6pt}\scshape\raggedright\large
}{}{0em}{}[\color{black}\titlerule \vspace{-6pt}]

% Custom commands
\newcommand{\resumeItem}[1]{
  \item\small{
    {#1 \vspace{-2pt}}
  }
}

\newcommand{\resumeSubheading}[4]{
  \vspace{-2pt}\item
    \begin{tabular*}{0.97\textwidth}[t]{l@{\extracolsep{\fill}}r}
      \textbf{#1} & #2 \\
      \textit{\small#3} & \textit{\small #4} \\
    \end{tabular*}\vspace{-6pt}
}

\newcommand{\resumeProjectHeading}[2]{
  \vspace{-2pt}\item
    \begin{tabular*}{0.97\textwidth}[t]{l@{\extracolsep{\fill}}r}
      \textbf{#1} & \textit{\small #2} \\
    \end{tabular*}\vspace{-6pt}
}

\newcommand{\resumeSubItem}[1]{\resumeItem{#1}\vspace{-4pt}}

\renewcommand{\labelitemii}{$\circ$}

\newcommand{\resumeSubHeadingListStart}{\begin{itemize}[leftmargin=*]}
\newcommand{\resumeSubHeadingListEnd}{\end{itemize}}
\newcommand{\resumeItemListStart}{\begin{itemize}}
\newcommand{\resumeItemListEnd}{\end{itemize}\vspace{-5pt}}

%-------------------------------------------
%%%%%%  CV STARTS HERE  %%%%%%%%%%%%%%%%%%%%
";

/// Generate a complete LaTeX document from a structured resume record.
pub fn generate_latex_resume(record: &ResumeRecord) -> String {
    let mut out = String::with_capacity(PREAMBLE.len() + 2048);
    out.push_str(PREAMBLE);
    out.push_str("\n\\begin{document}\n\n");
    push_header(&mut out, &record.contact_info);
    push_text_section(&mut out, "SUMMARY", "Professional Summary", &record.summary);
    push_text_section(&mut out, "SKILLS", "Skills", &record.skills);
    push_experience(&mut out, &record.experience);
    push_education(&mut out, &record.education);
    push_projects(&mut out, &record.projects);
    out.push_str("%-------------------------------------------\n\\end{document}\n");
    out
}

/// Generate a LaTeX document straight from record JSON.
///
/// This is the boundary where malformed input (wrong field types,
/// unparseable JSON) surfaces as a typed error instead of wrong output.
pub fn generate_latex_resume_from_json(json: &str) -> Result<String, TemplateError> {
    let record = ResumeRecord::from_json(json)?;
    Ok(generate_latex_resume(&record))
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn push_header(out: &mut String, contact: &ContactInfo) {
    out.push_str("%----------HEADING-----------------\n");
    out.push_str("\\begin{center}\n    \\textbf{\\Huge \\scshape ");
    match present(&contact.name) {
        Some(name) => out.push_str(&escape_latex(name)),
        None => out.push_str("Your Name"),
    }
    out.push_str("} \\\\ \\vspace{2pt}\n    \\small");
    let mobile = present(&contact.mobile);
    let email = present(&contact.email);
    if let Some(mobile) = mobile {
        out.push(' ');
        out.push_str(mobile);
    }
    // The pipe token joins mobile and email only when both are present, so
    // an omitted field never leaves a dangling separator.
    if mobile.is_some() && email.is_some() {
        out.push_str(" $|$");
    }
    if let Some(email) = email {
        out.push_str(" \\href{mailto:");
        out.push_str(email);
        out.push_str("}{\\underline{");
        out.push_str(email);
        out.push_str("}}");
    }
    if let Some(linkedin) = present(&contact.linkedin) {
        out.push_str(" $|$ \\href{");
        out.push_str(linkedin);
        out.push_str("}{\\underline{LinkedIn}}");
    }
    if let Some(twitter) = present(&contact.twitter) {
        out.push_str(" $|$ \\href{");
        out.push_str(twitter);
        out.push_str("}{\\underline{Twitter}}");
    }
    out.push_str("\n\\end{center}\n\\vspace{-8pt}\n\n");
}

fn push_text_section(out: &mut String, banner: &str, title: &str, body: &str) {
    if body.is_empty() {
        return;
    }
    out.push_str("%-----------");
    out.push_str(banner);
    out.push_str("-----------------\n\\section{");
    out.push_str(title);
    out.push_str("}\n  \\small{");
    out.push_str(&escape_latex(body));
    out.push_str("}\n\n");
}

fn date_range(start: &str, end: Option<&str>, current: bool, present_suffix: &str) -> String {
    let mut range = String::from(start);
    if current {
        range.push_str(present_suffix);
    } else if let Some(end) = end.filter(|e| !e.is_empty()) {
        range.push_str(" - ");
        range.push_str(end);
    }
    range
}

fn push_experience(out: &mut String, entries: &[ExperienceEntry]) {
    if entries.is_empty() {
        return;
    }
    out.push_str("%-----------EXPERIENCE-----------------\n");
    out.push_str("\\section{Experience}\n  \\resumeSubHeadingListStart\n");
    for exp in entries {
        out.push_str("\n    \\resumeSubheading\n      {");
        out.push_str(&escape_latex(&exp.title));
        out.push_str("}{");
        out.push_str(&date_range(
            &exp.start_date,
            exp.end_date.as_deref(),
            exp.current,
            " - Present",
        ));
        out.push_str("}\n      {");
        out.push_str(&escape_latex(&exp.organization));
        out.push_str("}{");
        if let Some(location) = present(&exp.location) {
            out.push_str(location);
        }
        out.push_str("}\n      \\resumeItemListStart\n        \\resumeItem{");
        out.push_str(&escape_latex(&exp.description));
        out.push_str("}\n      \\resumeItemListEnd\n");
    }
    out.push_str("  \\resumeSubHeadingListEnd\n\n");
}

fn push_education(out: &mut String, entries: &[EducationEntry]) {
    if entries.is_empty() {
        return;
    }
    out.push_str("%-----------EDUCATION-----------------\n");
    out.push_str("\\section{Education}\n  \\resumeSubHeadingListStart\n");
    for edu in entries {
        out.push_str("\n    \\resumeSubheading\n      {");
        out.push_str(&escape_latex(&edu.institution));
        out.push_str("}{");
        if let Some(location) = present(&edu.location) {
            out.push_str(location);
        }
        out.push_str("}\n      {");
        out.push_str(&escape_latex(&edu.degree));
        if let Some(grade) = present(&edu.grade) {
            out.push_str(" -- GPA: ");
            out.push_str(&escape_latex(grade));
        }
        out.push_str("}{");
        out.push_str(&date_range(
            &edu.start_date,
            edu.end_date.as_deref(),
            edu.current,
            " - Present (Expected)",
        ));
        out.push_str("}\n");
        if let Some(description) = present(&edu.description) {
            out.push_str("      \\resumeItemListStart\n        \\resumeItem{");
            out.push_str(&escape_latex(description));
            out.push_str("}\n      \\resumeItemListEnd\n");
        }
    }
    out.push_str("  \\resumeSubHeadingListEnd\n\n");
}

fn push_projects(out: &mut String, entries: &[ProjectEntry]) {
    if entries.is_empty() {
        return;
    }
    out.push_str("%-----------PROJECTS-----------------\n");
    out.push_str("\\section{Projects}\n  \\resumeSubHeadingListStart\n");
    for proj in entries {
        out.push_str("\n    \\resumeProjectHeading\n      {");
        out.push_str(&escape_latex(&proj.name));
        if let Some(tech) = present(&proj.technologies) {
            out.push_str(" $|$ \\emph{");
            out.push_str(&escape_latex(tech));
            out.push('}');
        }
        if let Some(github) = present(&proj.github_url) {
            out.push_str(" $|$ \\href{");
            out.push_str(github);
            out.push_str("}{\\underline{GitHub}}");
        }
        if let Some(live) = present(&proj.live_url) {
            out.push_str(" $|$ \\href{");
            out.push_str(live);
            out.push_str("}{\\underline{Live}}");
        }
        out.push_str("}{");
        if let Some(start) = present(&proj.start_date) {
            out.push_str(start);
        }
        if let Some(end) = present(&proj.end_date) {
            out.push_str(" - ");
            out.push_str(end);
        }
        out.push_str("}\n      \\resumeItemListStart\n        \\resumeItem{");
        out.push_str(&escape_latex(&proj.description));
        out.push_str("}\n      \\resumeItemListEnd\n");
    }
    out.push_str("  \\resumeSubHeadingListEnd\n\n");
}

/// Starter document for new resumes, for hand editing in the preview.
pub fn default_latex_template() -> &'static str {
    DEFAULT_TEMPLATE
}

const DEFAULT_TEMPLATE: &str = r"\documentclass[letterpaper,11pt]{article}

\usepackage{latexsym}
\usepackage[empty]{fullpage}
\usepackage{titlesec}
\usepackage{marvosym}
\usepackage[usenames,dvipsnames]{color}
\usepackage{verbatim}
\usepackage{enumitem}
\usepackage[hidelinks]{hyperref}
\usepackage{fancyhdr}
\usepackage[english]{babel}
\usepackage{tabularx}

\pagestyle{fancy}
\fancyhf{}
\fancyfoot{}
\renewcommand{\headrulewidth}{0pt}
\renewcommand{\footrulewidth}{0pt}

\addtolength{\oddsidemargin}{-0.5in}
\addtolength{\evensidemargin}{-0.5in}
\addtolength{\textwidth}{1in}
\addtolength{\topmargin}{-.5in}
\addtolength{\textheight}{1.0in}

\urlstyle{same}
\raggedbottom
\raggedright
\setlength{\tabcolsep}{0in}

\titleformat{\section}{
  \vspace{-4pt}\scshape\raggedright\large
}{}{0em}{}[\color{black}\titlerule \vspace{-5pt}]

\begin{document}

\begin{center}
    \textbf{\Huge \scshape Your Name} \\ \vspace{1pt}
    \small +1-XXX-XXX-XXXX $|$ \href{mailto:email@example.com}{\underline{email@example.com}} $|$
    \href{https://linkedin.com}{\underline{LinkedIn}} $|$
    \href{https://github.com}{\underline{GitHub}}
\end{center}

\section{Professional Summary}
  Write your professional summary here...

\section{Skills}
  \textbf{Languages:} JavaScript, Python, Java \\
  \textbf{Frameworks:} React, Node.js, Django \\
  \textbf{Tools:} Git, Docker, AWS

\section{Experience}
  Start adding your work experience...

\section{Education}
  Add your education details...

\section{Projects}
  List your notable projects...

\end{document}";
