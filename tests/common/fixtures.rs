use serde_json::{Value, json};

/// An invoice header map: a constants block, a stacked header and a line list.
pub const INVOICE_MAP: &str = r#"
<Page>
    <Constants>
        <Company>Acme Trading</Company>
        <FontFamily Value="Times"/>
    </Constants>
    <Container X="10" Y="10" Width="150" YSpacing="2">
        <Text Constant="Company" FontSize="5"/>
        <Property Property="customer.name"/>
        <Property Property="total" Format="¤#,##0.00"/>
        <Property Property="issued" DateFormat="%d/%m/%Y"/>
    </Container>
</Page>
"#;

pub fn invoice(name: &str, total: f64) -> Value {
    json!({
        "customer": { "name": name },
        "total": total,
        "issued": "2024-03-05"
    })
}

/// A map with a single absolutely placed line.
pub const LINE_MAP: &str = r#"<Text Y="5" Height="6" Property="name"/>"#;
