use yew::prelude::*;

use crate::models::Doctor;

#[derive(Properties, PartialEq)]
pub struct DoctorListProps {
    pub doctors: Vec<Doctor>,
    #[prop_or_default]
    pub loading: bool,
}

// Unkeyed: directory names repeat across specialities.
#[function_component(DoctorList)]
pub fn doctor_list(props: &DoctorListProps) -> Html {
    html! {
        <>
            <h3>{"Available Doctors"}</h3>
            <ul class="doctor-list" aria-busy={props.loading.to_string()}>
                { for props.doctors.iter().map(|doctor| html! {
                    <li>{format!("{} - {} - {}", doctor.name, doctor.expertise, doctor.city)}</li>
                }) }
            </ul>
        </>
    }
}
