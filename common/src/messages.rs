//! サイト表示用の固定文言（アラビア語）

pub const FABRICS_EMPTY: &str = "لا يوجد أقمشة مضافة بعد.";
pub const WORKS_EMPTY: &str = "لا يوجد أعمال مضافة بعد.";

pub const CODE_LABEL: &str = "الكود:";
pub const TYPE_LABEL: &str = "النوع:";

pub const FABRIC_PLACEHOLDER_OPTION: &str = "اختر القماش";

pub const FABRIC_INCOMPLETE: &str = "يرجى تعبئة جميع الحقول المطلوبة وإرفاق صورة.";
pub const FABRIC_ADDED: &str = "تم إضافة القماش بنجاح.";

pub const WORK_INCOMPLETE: &str = "يرجى تعبئة عنوان العمل وإرفاق صورة.";
pub const WORK_ADDED: &str = "تم إضافة العمل بنجاح.";

pub const REQUEST_INCOMPLETE: &str = "يرجى تعبئة نوع التفصيل والقماش ورقم الهاتف.";
pub const REQUEST_HEADER: &str = "طلب تفصيل جديد:";
pub const REQUEST_SENT: &str = "تم إرسال طلبك بنجاح!";
pub const REQUEST_FOLLOW_UP: &str = "يرجى التواصل معنا عبر واتساب أو الاتصال لإكمال التفاصيل.";

pub const WRONG_PASSWORD: &str = "كلمة المرور غير صحيحة.";
