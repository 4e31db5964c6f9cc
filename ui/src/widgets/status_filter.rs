use egui::{ComboBox, Ui};
use roster_business::PatientStatus;

const ALL_LABEL: &str = "All";

/// "Status:" combo box. Returns the new selection when the user picks a
/// different value.
pub fn status_filter(ui: &mut Ui, current: Option<PatientStatus>) -> Option<Option<PatientStatus>> {
    let mut selected = current;
    let current_label = current.map_or_else(|| ALL_LABEL.to_owned(), |status| status.to_string());

    ui.horizontal(|ui| {
        ui.label("Status:");
        ComboBox::from_id_salt("patient_status_filter")
            .selected_text(current_label)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut selected, None, ALL_LABEL);
                for status in PatientStatus::ALL {
                    ui.selectable_value(&mut selected, Some(status), status.as_str());
                }
            });
    });

    (selected != current).then_some(selected)
}
