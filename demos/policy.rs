use policy_layout::{layout_document, DocumentInfo, Font, FontMeasurer, LayoutConfig, MonospaceMeasurer, TextMeasurer};

const POLICY: &str = "# Purpose and Scope
This policy sets out how Acme Corp protects the information it holds about patients, staff and partners.
It applies to all employees, contractors and third parties with access to Acme systems.

# Responsibilities
## Information Security Officer
- Maintains this policy and reviews it every twelve months
- Reports security incidents to the executive team
## All Staff
- Complete security awareness training within thirty days of starting
- Report suspected incidents immediately

# Access Control
Access to systems is granted on a least privilege basis and reviewed quarterly.

# Compliance
Breaches of this policy may result in disciplinary action.";

fn main() {
    env_logger::init();

    // cargo run --example policy -- regular.ttf bold.ttf
    let args: Vec<String> = std::env::args().skip(1).collect();
    let measurer: Box<dyn TextMeasurer> = match args.as_slice() {
        [regular, bold] => {
            let regular = Font::from_path(regular).expect("can load regular font");
            let bold = Font::from_path(bold).expect("can load bold font");
            Box::new(FontMeasurer::new(regular, bold))
        }
        _ => Box::new(MonospaceMeasurer::default()),
    };

    let info = DocumentInfo::new()
        .title("Information Security Policy")
        .subject("Acme Corp")
        .category("Healthcare")
        .document_type("Information Security Policy")
        .clone();

    let config = LayoutConfig::policy_document();
    let result = layout_document(POLICY, &info, &config, measurer.as_ref()).expect("can lay out policy");

    println!("{}", result.to_json_pretty().expect("can serialize layout"));
    eprintln!("{} pages, export as {}", result.total_pages, info.export_file_name());
}
