// Summarization templates that reduce scraped pages to short markdown blurbs.
// Every template takes a single `{scraped_info}` placeholder.

pub const GENERIC_BLURB_TEMPLATE: &str = r#"Generate a blurb based on the text provided. The blurb should be engaging, concise, and capture the essence of the text in a markdown format.

**Text:**
{scraped_info}

**Blurb:**"#;

pub const LINKEDIN_BLURB_TEMPLATE: &str = r#"Based on the LinkedIn profile below, write a professional summary that captures the candidate's experience, skills, and career aspirations. The summary should be engaging, concise, and tailored to the candidate's professional goals in a markdown format.

**LinkedIn Profile:**
{scraped_info}

**Professional Summary:**"#;

pub const GITHUB_BLURB_TEMPLATE: &str = r#"Based on the GitHub profile below, write a brief summary that highlights the candidate's technical skills, projects, and contributions. The summary should be engaging, concise, and tailored to the candidate's technical expertise in a markdown format.

**GitHub Profile:**
{scraped_info}

**Technical Summary:**"#;

pub const RESUME_BLURB_TEMPLATE: &str = r#"Based on the resume below, write a professional summary that captures the candidate's qualifications, experience, and career objectives. The summary should be engaging, concise, and tailored to the candidate's professional background in a markdown format.

**Resume:**
{scraped_info}

**Professional Summary:**"#;

pub const JOB_DESCRIPTION_BLURB_TEMPLATE: &str = r#"Based on the job description below, write a brief summary that outlines the key responsibilities, requirements, and qualifications for the role. The summary should be engaging, concise, and tailored to the job description in a markdown format.

**Job Description:**
{scraped_info}

**Summary:**"#;

pub const COMPANY_BLURB_TEMPLATE: &str = r#"Based on the company information below, write a brief summary that highlights the company's mission, values, and culture. The summary should be engaging, concise, and tailored to the company profile in a markdown format.

**Company Information:**
{scraped_info}

**Company Summary:**"#;

pub const CRUNCHBASE_BLURB_TEMPLATE: &str = r#"Based on the Crunchbase profile below, write a brief summary that highlights the company's industry, funding, key personnel, and notable achievements. The summary should be engaging, concise, and tailored to the company profile in a markdown format.

**Crunchbase Profile:**
{scraped_info}

**Company Summary:**"#;
