<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Previous navigation button in modal</description>
   <name>btn_ModalPrev</name>
   <tag></tag>
   <elementGuidId>review-modal-prev</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//div[@role='dialog']//button[contains(@aria-label, 'Previous') or contains(@class, 'prev')]</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>[role='dialog'] button[aria-label*='Previous'], .modal-prev</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
