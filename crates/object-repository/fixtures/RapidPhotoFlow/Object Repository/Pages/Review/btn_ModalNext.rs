<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Next navigation button in modal</description>
   <name>btn_ModalNext</name>
   <tag></tag>
   <elementGuidId>review-modal-next</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//div[@role='dialog']//button[contains(@aria-label, 'Next') or contains(@class, 'next')]</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>[role='dialog'] button[aria-label*='Next'], .modal-next</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
